use bitflags::bitflags;

bitflags! {
    /// Radio transmit options carried by commands the controller relays.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TransmitOptions: u8 {
        const ACK        = 0x01;
        const LOW_POWER  = 0x02;
        const AUTO_ROUTE = 0x04;
        const NO_ROUTE   = 0x10;
        const EXPLORE    = 0x20;
    }
}

impl Default for TransmitOptions {
    fn default() -> Self {
        Self::ACK | Self::AUTO_ROUTE | Self::EXPLORE
    }
}
