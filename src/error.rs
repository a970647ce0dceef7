use std::net::{AddrParseError, Ipv4Addr};
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CidrError {
    // IPv4Addr などのパース失敗
    #[error("Address parse error: {0}")]
    AddrParseError(#[from] AddrParseError),

    // 文字列 → 数値パース失敗
    #[error("Integer parse error: {0}")]
    ParseIntError(#[from] ParseIntError),

    // CIDR表記そのものの形式不正
    #[error("Format error: {0}")]
    FormatError(String),

    // プレフィックス長が [0, 32] の範囲外
    #[error("Prefix length {0} is out of range (0-32)")]
    PrefixOutOfRange(u32),

    // 分割先プレフィックスが分割元より短い(=より大きいブロック)
    #[error("Destination prefix /{dst} is less specific than source /{src}")]
    PrefixTooShort { src: u8, dst: u8 },

    // 上位ビットから連続していないネットマスク
    #[error("Invalid netmask: {0}")]
    InvalidNetmask(Ipv4Addr),

    // 特定の入力が不正だった場合など
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
