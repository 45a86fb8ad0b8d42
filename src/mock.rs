//! Recording interface used by the unit tests
//!
//! Logs every command and data write, and replays CASET/PASET/RAMWR the way the
//! controller does so tests can assert on the physical pixels that were written.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::color::Color;
use crate::command::{COLUMN_ADDRESS_SET, MEMORY_WRITE, PAGE_ADDRESS_SET};
use crate::config::{Builder, ByteOrder, Rotation};
use crate::display::Display;
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusFault;

#[derive(Debug, Default)]
pub struct MockInterface {
    /// Every command byte, in order
    pub commands: Vec<u8>,
    /// Data payloads paired with the command they followed
    pub command_data: Vec<(u8, Vec<u8>)>,
    /// Decoded pixel writes in physical coordinates
    pub writes: Vec<(u16, u16, Color)>,
    /// Number of hardware resets
    pub resets: usize,
    /// Fail every call once this many calls have succeeded
    pub fail_after: Option<usize>,
    pub byte_order: ByteOrder,
    /// Every command or data call made, failed ones included
    pub attempts: usize,
    calls: usize,
    last_command: Option<u8>,
    window: (u16, u16, u16, u16),
    gram_cursor: (u16, u16),
    pending: Option<u8>,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(calls: usize) -> Self {
        Self {
            fail_after: Some(calls),
            ..Self::default()
        }
    }

    /// Whether nothing at all reached the bus
    pub fn is_silent(&self) -> bool {
        self.commands.is_empty() && self.command_data.is_empty()
    }

    /// Distinct physical pixels written
    pub fn pixels(&self) -> BTreeSet<(u16, u16)> {
        self.writes.iter().map(|&(x, y, _)| (x, y)).collect()
    }

    /// Last color written to a physical pixel
    pub fn color_at(&self, x: u16, y: u16) -> Option<Color> {
        self.writes
            .iter()
            .rev()
            .find(|&&(px, py, _)| px == x && py == y)
            .map(|&(_, _, c)| c)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.command_data.clear();
        self.writes.clear();
    }

    fn tick(&mut self) -> Result<(), BusFault> {
        self.attempts += 1;
        if self.fail_after.is_some_and(|limit| self.calls >= limit) {
            return Err(BusFault);
        }
        self.calls += 1;
        Ok(())
    }

    fn push_pixel(&mut self, bytes: [u8; 2]) {
        let raw = match self.byte_order {
            ByteOrder::BigEndian => u16::from_be_bytes(bytes),
            ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
        };
        let (x0, _, x1, y1) = self.window;
        let (x, y) = self.gram_cursor;
        if y > y1 {
            return;
        }
        self.writes.push((x, y, Color(raw)));
        self.gram_cursor = if x >= x1 { (x0, y + 1) } else { (x + 1, y) };
    }
}

fn parse_range(data: &[u8]) -> (u16, u16) {
    match data {
        [a, b, c, d, ..] => (u16::from_be_bytes([*a, *b]), u16::from_be_bytes([*c, *d])),
        _ => (0, 0),
    }
}

impl DisplayInterface for MockInterface {
    type Error = BusFault;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.tick()?;
        self.commands.push(command);
        self.last_command = Some(command);
        self.pending = None;
        if command == MEMORY_WRITE {
            self.gram_cursor = (self.window.0, self.window.1);
        }
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tick()?;
        let cmd = self.last_command.unwrap_or(0);
        self.command_data.push((cmd, data.to_vec()));
        match cmd {
            COLUMN_ADDRESS_SET => {
                let (start, end) = parse_range(data);
                self.window.0 = start;
                self.window.2 = end;
            }
            PAGE_ADDRESS_SET => {
                let (start, end) = parse_range(data);
                self.window.1 = start;
                self.window.3 = end;
            }
            MEMORY_WRITE => {
                for &byte in data {
                    match self.pending.take() {
                        Some(high) => self.push_pixel([high, byte]),
                        None => self.pending = Some(byte),
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D) {
        self.resets += 1;
    }
}

pub struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// 240x320 display on a fresh mock
pub fn test_display() -> Display<MockInterface> {
    test_display_rotated(Rotation::Rotate0)
}

pub fn test_display_rotated(rotation: Rotation) -> Display<MockInterface> {
    let config = Builder::new().rotation(rotation).build().unwrap();
    Display::new(MockInterface::new(), config)
}

/// Small panel, handy for exhaustive checks
pub fn small_display(width: u16, height: u16) -> Display<MockInterface> {
    let config = Builder::new().size(width, height).build().unwrap();
    Display::new(MockInterface::new(), config)
}
