use crate::addr::parse_ipv4;
use crate::block::Ipv4Block;
use crate::error::CidrError;
use std::net::Ipv4Addr;

/// addr を先頭として整列を保てる最大ブロックのプレフィックス長を返す。
/// 32 - (最下位の立っているビット位置) に等しい。
/// addr = 0 は「最下位ビット」が定義できないため明示的に分岐し、
/// アドレス空間全体が整列する /0 を返す。
pub fn largest_aligned_prefix(addr: u32) -> u8 {
    if addr == 0 {
        return 0;
    }
    (32 - addr.trailing_zeros()) as u8
}

/// current から始まり end を超えない最大のCIDRブロックのプレフィックス長(0-32)。
/// 整列制約と残り幅制約のうち、小さいブロックを強制する方
/// (=数値の大きいプレフィックス)が勝つ。
fn largest_block(current: u64, end: u64) -> u8 {
    debug_assert!(current <= end, "current must be <= end");

    let aligned = largest_aligned_prefix(current as u32);
    // 残り区間 end - current + 1 に収まるビット数。
    // 2の冪でない場合は切り捨て、後続の反復が残りを覆う。
    let span_bits = (end - current + 1).ilog2().min(32);
    let fit = (32 - span_bits) as u8;

    aligned.max(fit)
}

/// 区間 [start, end] を最小個数の整列済みCIDRブロック列へ分解する。
/// start <= end が前提(同値は単一アドレスの範囲として有効)。
/// 生成順は基底アドレスの昇順で、隙間も重なりもなく区間を正確に覆う。
pub fn summarize_range(start: u32, end: u32) -> Vec<Ipv4Block> {
    debug_assert!(start <= end, "start must be <= end");

    let end = end as u64;
    let mut blocks = Vec::new();
    let mut current = start as u64;

    while current <= end {
        let prefix = largest_block(current, end);
        blocks.push(Ipv4Block::new_unchecked(current as u32, prefix));
        // 末尾が 0xFFFFFFFF の場合でもループを終了できるよう u64 で前進させる
        current += 1u64 << (32 - prefix as u32);
    }

    blocks
}

/// ドット区切り表記の範囲をCIDR表記の文字列列へ分解する。
/// end が None の場合は start 単独の範囲として扱う。
pub fn summarize_range_strs(start: &str, end: Option<&str>) -> Result<Vec<String>, CidrError> {
    let start_num = parse_ipv4(start)?;
    let end_num = match end {
        Some(text) => parse_ipv4(text)?,
        None => start_num,
    };
    if start_num > end_num {
        return Err(CidrError::InvalidInput(format!(
            "range start {} exceeds end {}",
            Ipv4Addr::from(start_num),
            Ipv4Addr::from(end_num)
        )));
    }
    Ok(summarize_range(start_num, end_num)
        .iter()
        .map(|b| b.to_string())
        .collect())
}

/// ブロックを dst_prefix の整列済みサブブロック列へ分割する。
/// dst_prefix は分割元のプレフィックス以上(=より具体的)でなければならない。
/// 少なくとも1ブロックを必ず出力し、最後のブロックの末尾は
/// 分割元の末尾と正確に一致する。
pub fn split_block(block: &Ipv4Block, dst_prefix: u8) -> Result<Vec<Ipv4Block>, CidrError> {
    if dst_prefix > 32 {
        return Err(CidrError::PrefixOutOfRange(dst_prefix as u32));
    }
    if dst_prefix < block.prefix() {
        return Err(CidrError::PrefixTooShort {
            src: block.prefix(),
            dst: dst_prefix,
        });
    }

    let (start, end) = block.range();
    let end = end as u64;
    let step = 1u64 << (32 - dst_prefix as u32);

    let mut blocks = Vec::new();
    let mut current = start as u64;
    loop {
        blocks.push(Ipv4Block::new_unchecked(current as u32, dst_prefix));
        current += step;
        if current > end {
            break;
        }
    }

    Ok(blocks)
}

/// CIDR表記のブロックを dst_prefix のCIDR表記列へ分割する。
pub fn split_block_strs(cidr_text: &str, dst_prefix: u8) -> Result<Vec<String>, CidrError> {
    let block = cidr_text.parse::<Ipv4Block>()?;
    Ok(split_block(&block, dst_prefix)?
        .iter()
        .map(|b| b.to_string())
        .collect())
}
