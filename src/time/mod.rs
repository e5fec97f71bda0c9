//! Frame/second conversion and `HH:MM:SS.mmm` timecodes.

pub(crate) mod timecode;
