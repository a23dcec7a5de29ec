pub mod power;
pub mod waveform;

pub use power::{decode_power, encode_power, EncodedPower};
pub use waveform::{encode_channel, encode_synchronized, Channel, Waveform};
