/// Register pointers, shared by every device in the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Register {
    Conversion = 0x00,
    Config = 0x01,
    LowThreshold = 0x02,
    HighThreshold = 0x03,
}

impl Register {
    pub fn addr(self) -> u8 {
        self as u8
    }
}

/// Power-on configuration: single-shot, powered down, comparator disabled.
pub const IDLE_CONFIG: u16 = 0x8583;

pub const OS_SINGLE: u16 = 0x8000;
pub const MUX_SHIFT: u16 = 12;
pub const GAIN_SHIFT: u16 = 9;
pub const MODE_SINGLE: u16 = 0x0100;
pub const MODE_CONTINUOUS: u16 = 0x0000;
pub const DATA_RATE_SHIFT: u16 = 5;
pub const COMP_WINDOW: u16 = 0x0010;
pub const COMP_ACTIVE_HIGH: u16 = 0x0008;
pub const COMP_LATCHING: u16 = 0x0004;
pub const COMP_QUEUE_DISABLE: u16 = 0x0003;
