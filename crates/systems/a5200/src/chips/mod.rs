//! Custom chip register stubs.
//!
//! Only the register surface the address-space layer needs is modeled here.
//! Video, audio and timing pipelines belong to other collaborators, which can
//! replace any of these stubs by registering their own [`Chip`] on the bus.

mod antic;
mod gtia;
mod pia;
mod pokey;
mod rtime8;

pub use antic::Antic;
pub use gtia::{ConsoleKeys, Gtia, CONSOL_OPTION, CONSOL_SELECT, CONSOL_START};
pub use pia::Pia;
pub use pokey::Pokey;
pub use rtime8::{CartIoArea, HostClock, Rtime8};

/// Register interface of a memory-mapped chip.
///
/// `addr` is the full CPU address; each chip decodes its own mirror mask.
pub trait Chip {
    fn get_byte(&mut self, addr: u16) -> u8;

    fn put_byte(&mut self, addr: u16, val: u8);

    /// Called on warmstart when [`Chip::has_reset_line`] is true
    fn reset(&mut self) {}

    fn has_reset_line(&self) -> bool {
        false
    }
}
