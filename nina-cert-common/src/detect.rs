// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Board detection over enumerated serial ports.
//!
//! Works on [`PortCandidate`] rather than on a serial library's types so the
//! matching rules can be tested without hardware.

/// Arduino SA USB vendor ID.
pub const ARDUINO_VID: u16 = 0x2341;

/// MKR WiFi 1010 product IDs: running sketch and double-tap bootloader.
pub const MKR_WIFI_1010_PIDS: [u16; 2] = [0x8054, 0x0054];

/// One enumerated serial port.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortCandidate {
    pub name: String,
    pub vid: Option<u16>,
    pub pid: Option<u16>,
    pub product: Option<String>,
}

pub fn is_mkr_wifi_1010(candidate: &PortCandidate) -> bool {
    match (candidate.vid, candidate.pid) {
        (Some(vid), Some(pid)) => vid == ARDUINO_VID && MKR_WIFI_1010_PIDS.contains(&pid),
        _ => false,
    }
}

/// The port of the only attached MKR WiFi 1010.
///
/// Returns `None` when no board or more than one board is attached.
pub fn select_board_port(candidates: &[PortCandidate]) -> Option<&PortCandidate> {
    let mut boards = candidates.iter().filter(|c| is_mkr_wifi_1010(c));
    let first = boards.next()?;
    if boards.next().is_some() {
        log::warn!("several MKR WiFi 1010 boards attached; not choosing one");
        return None;
    }
    Some(first)
}
