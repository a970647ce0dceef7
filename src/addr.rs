use crate::error::CidrError;
use std::net::Ipv4Addr;

/// ドット区切り10進表記のIPv4アドレスを32ビット整数へ変換する。
/// 先頭オクテットがビット31..24に対応するビッグエンディアン順。
pub fn parse_ipv4(text: &str) -> Result<u32, CidrError> {
    let addr = text.parse::<Ipv4Addr>()?;
    Ok(u32::from(addr))
}

/// 32ビット整数をドット区切り10進表記へ変換する。
/// 全ての u32 について parse_ipv4 と正確に往復する。
pub fn format_ipv4(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}
