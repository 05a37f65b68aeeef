/// Linearly maps `value` from `in_min..=in_max` onto `out_min..=out_max`.
///
/// Integer arithmetic, truncating toward zero. Values outside the input
/// range are extrapolated, not clamped. Returns `None` if `in_min` equals
/// `in_max` or the result does not fit in an `i32`.
///
/// # Examples
///
/// ```
/// use ads1x15::rescale;
///
/// // Map a 12-bit reading onto millivolts at gain 1 (±4.096 V).
/// assert_eq!(rescale(1000, 0, 2047, 0, 4096), Some(2000));
/// assert_eq!(rescale(1000, 5, 5, 0, 4096), None);
/// ```
pub fn rescale(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> Option<i32> {
    if in_min == in_max {
        return None;
    }

    let (value, in_min, in_max) = (value as i64, in_min as i64, in_max as i64);
    let (out_min, out_max) = (out_min as i64, out_max as i64);

    i32::try_from((value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min).ok()
}

#[cfg(test)]
mod tests {
    use super::rescale;

    #[test]
    fn fast_counts_to_millivolts() {
        assert_eq!(rescale(0, 0, 2047, 0, 4096), Some(0));
        assert_eq!(rescale(512, 0, 2047, 0, 4096), Some(1024));
        assert_eq!(rescale(2047, 0, 2047, 0, 4096), Some(4096));
        assert_eq!(rescale(-2048, 0, 2047, 0, 4096), Some(-4098));
    }

    #[test]
    fn board_range() {
        assert_eq!(rescale(0, 0, 1635, 0, 1023), Some(0));
        assert_eq!(rescale(817, 0, 1635, 0, 1023), Some(511));
        assert_eq!(rescale(1635, 0, 1635, 0, 1023), Some(1023));
        assert_eq!(rescale(-1635, 0, 1635, 0, 1023), Some(-1023));
    }

    #[test]
    fn inverted_output() {
        assert_eq!(rescale(-32768, -32768, 32767, 255, 0), Some(255));
        assert_eq!(rescale(32767, -32768, 32767, 255, 0), Some(0));
    }

    #[test]
    fn empty_input_range() {
        assert_eq!(rescale(5, 3, 3, 0, 10), None);
        assert_eq!(rescale(0, 0, 0, 0, 0), None);
    }

    #[test]
    fn result_out_of_range() {
        assert_eq!(rescale(2047, 0, 1, 0, 2_000_000), None);
        assert_eq!(rescale(-2048, 0, 1, 0, 2_000_000), None);
        assert_eq!(rescale(1000, 0, 1, 0, 2_000_000), Some(2_000_000_000));
    }
}
