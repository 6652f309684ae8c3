use super::{PROGRAM_TERMINATOR, STATEMENT_TERMINATOR};
use crate::error;
use crate::lang::Error;
use crc::crc32;
use std::convert::TryFrom;
use std::fmt::Write;

type Result<T> = std::result::Result<T, Error>;

const PRESENT_MAGIC: u8 = 0xA5;
const CHECKSUM_AT: usize = 1;
const HEADER_LEN: usize = 5;

/// ## Persistent program store
///
/// A fixed-size byte region standing in for EEPROM. The first bytes
/// hold the "program present" flag and a CRC-32 of the stored program;
/// the program itself lives from `program_offset` up to a
/// `PROGRAM_TERMINATOR`. The flag is cleared before any program byte
/// is written and set only after the terminator is in place, so a
/// half-written program is never reported present.

#[derive(Debug, Clone)]
pub struct Store {
    bytes: Vec<u8>,
    program_offset: usize,
}

impl Store {
    pub fn new(size: usize, program_offset: usize) -> Store {
        let size = size.max(HEADER_LEN + 1);
        let program_offset = program_offset.max(HEADER_LEN).min(size - 1);
        Store {
            bytes: vec![PROGRAM_TERMINATOR; size],
            program_offset,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    pub fn program_offset(&self) -> usize {
        self.program_offset
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn read(&self, pos: usize) -> Option<u8> {
        self.bytes.get(pos).copied()
    }

    pub fn write(&mut self, pos: usize, b: u8) -> Result<()> {
        match self.bytes.get_mut(pos) {
            Some(slot) => {
                *slot = b;
                Ok(())
            }
            None => Err(error!(StoreEnd)),
        }
    }

    pub fn clear_program(&mut self) {
        self.bytes[0] = PROGRAM_TERMINATOR;
        self.bytes[self.program_offset] = PROGRAM_TERMINATOR;
    }

    pub fn set_program_stored(&mut self) {
        let checksum = crc32::checksum_ieee(self.program_image());
        self.bytes[CHECKSUM_AT..HEADER_LEN].copy_from_slice(&checksum.to_le_bytes());
        self.bytes[0] = PRESENT_MAGIC;
    }

    pub fn is_program_stored(&self) -> bool {
        if self.bytes[0] != PRESENT_MAGIC {
            return false;
        }
        let stored = match <[u8; 4]>::try_from(&self.bytes[CHECKSUM_AT..HEADER_LEN]) {
            Ok(le) => u32::from_le_bytes(le),
            Err(_) => return false,
        };
        stored == crc32::checksum_ieee(self.program_image())
    }

    /// The program text, without its terminator.
    pub fn program_bytes(&self) -> &[u8] {
        let image = self.program_image();
        match image.last() {
            Some(&PROGRAM_TERMINATOR) => &image[..image.len() - 1],
            _ => image,
        }
    }

    // Program bytes up to and including the terminator, if there is one.
    fn program_image(&self) -> &[u8] {
        let program = &self.bytes[self.program_offset..];
        match program.iter().position(|b| *b == PROGRAM_TERMINATOR) {
            Some(end) => &program[..=end],
            None => program,
        }
    }

    /// Replaces the whole store with a saved image. Images of another
    /// size are truncated or padded.
    pub fn load(&mut self, image: &[u8]) {
        let len = image.len().min(self.bytes.len());
        self.bytes[..len].copy_from_slice(&image[..len]);
        for b in self.bytes[len..].iter_mut() {
            *b = PROGRAM_TERMINATOR;
        }
    }

    /// Lists the program starting at `start`, one statement per line.
    pub fn dump(&self, start: usize) -> String {
        let mut s = String::from("Program: \n");
        let mut pos = start;
        loop {
            let b = match self.read(pos) {
                Some(b) => b,
                None => {
                    s.push_str("Eeprom end\n");
                    break;
                }
            };
            pos += 1;
            match b {
                PROGRAM_TERMINATOR => {
                    let _ = writeln!(s, "Program size: {}", pos - start);
                    break;
                }
                STATEMENT_TERMINATOR => s.push('\n'),
                b => s.push(char::from(b)),
            }
            if pos >= self.size() {
                s.push_str("Eeprom end\n");
                break;
            }
        }
        s
    }

    pub fn find_label(&self, start: usize, label: &[u8]) -> Option<usize> {
        find_label(&self.bytes, start, label)
    }
}

/// Offset of the statement after the one containing `pos`, or `None`
/// when the program or the store ends first.
pub fn next_statement(bytes: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        match bytes.get(pos) {
            None | Some(&PROGRAM_TERMINATOR) => return None,
            Some(&STATEMENT_TERMINATOR) => {
                pos += 1;
                return if pos < bytes.len() { Some(pos) } else { None };
            }
            Some(_) => pos += 1,
        }
    }
}

/// Finds the `CL` statement declaring `label`, scanning whole
/// statements forward from `start`. The label must match exactly and
/// be followed directly by the statement terminator. The first
/// declaration wins.
pub fn find_label(bytes: &[u8], start: usize, label: &[u8]) -> Option<usize> {
    let mut pos = start;
    loop {
        match bytes.get(pos) {
            None | Some(&PROGRAM_TERMINATOR) => return None,
            _ => {}
        }
        let statement = &bytes[pos..];
        let declares = statement.len() >= 2
            && statement[0].eq_ignore_ascii_case(&b'C')
            && statement[1].eq_ignore_ascii_case(&b'L');
        if declares {
            let text = &statement[2..];
            if text.starts_with(label) && text.get(label.len()) == Some(&STATEMENT_TERMINATOR) {
                return Some(pos);
            }
        }
        pos = next_statement(bytes, pos)?;
    }
}
