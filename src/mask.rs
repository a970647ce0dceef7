use crate::error::CidrError;
use std::net::Ipv4Addr;

/// プレフィックス長(0-32)から上位ビットの立ったネットマスクを生成する。
/// prefix = 0 は全ゼロマスク。u32のシフト幅32は未定義のため明示的に分岐する。
pub fn prefix_to_mask(prefix: u8) -> Result<u32, CidrError> {
    if prefix > 32 {
        return Err(CidrError::PrefixOutOfRange(prefix as u32));
    }
    if prefix == 0 {
        return Ok(0);
    }
    Ok(u32::MAX << (32 - prefix as u32))
}

/// 立っているビット数(0-32)を返す。
pub fn popcount(value: u32) -> u32 {
    value.count_ones()
}

/// 上位から連続した1のビット列だけを正規のネットマスクとして認める。
/// (~m + 1) & ~m == 0 が成り立つのは ~m が「下位連続1」のときのみで、
/// 127.0.0.1 のような飛び飛びのパターンはここで弾かれる。
pub fn is_valid_netmask(mask: u32) -> bool {
    let inv = !mask;
    inv.wrapping_add(1) & inv == 0
}

/// 正規のネットマスクをプレフィックス長へ変換する。
/// 非連続マスクにはプレフィックス長が定義できないため、推測せずエラーを返す。
pub fn mask_to_prefix(mask: u32) -> Result<u8, CidrError> {
    if !is_valid_netmask(mask) {
        return Err(CidrError::InvalidNetmask(Ipv4Addr::from(mask)));
    }
    Ok(mask.count_ones() as u8)
}
