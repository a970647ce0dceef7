use crate::addr::{format_ipv4, parse_ipv4};
use crate::error::CidrError;
use crate::mask::prefix_to_mask;
use ipnet::Ipv4Net;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// 整列済みのIPv4 CIDRブロック。
/// base の下位 (32 - prefix) ビットは常にゼロで、
/// 閉区間 [base, base + 2^(32-prefix) - 1] を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ipv4Block {
    base: u32,
    prefix: u8,
}

impl Ipv4Block {
    /// アドレスをマスクで切り詰めて整列済みブロックを作る。
    /// マスク適用は必ず整列した結果を生むため、失敗するのは
    /// prefix が範囲外の場合だけ。
    pub fn aligned(addr: u32, prefix: u8) -> Result<Self, CidrError> {
        let mask = prefix_to_mask(prefix)?;
        Ok(Ipv4Block {
            base: addr & mask,
            prefix,
        })
    }

    /// 呼び出し側が整列とプレフィックス範囲を保証している場合の内部コンストラクタ。
    pub(crate) fn new_unchecked(base: u32, prefix: u8) -> Self {
        debug_assert!(prefix <= 32);
        debug_assert_eq!(base as u64 & ((1u64 << (32 - prefix as u32)) - 1), 0);
        Ipv4Block { base, prefix }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// ブロックが表す閉区間 (先頭, 末尾)。
    /// prefix = 0 のとき 2^32 - 1 を正確に扱えるよう u64 で計算する。
    pub fn range(&self) -> (u32, u32) {
        let size = 1u64 << (32 - self.prefix as u32);
        let end = self.base as u64 + size - 1;
        (self.base, end as u32)
    }

    /// アドレスがブロックの区間に含まれるか(両端を含む)。
    pub fn contains(&self, addr: u32) -> bool {
        let (start, end) = self.range();
        start <= addr && addr <= end
    }

    /// ipnet 側のパイプライン(IpNet::aggregate など)へ渡すための変換。
    pub fn to_ipnet(&self) -> Ipv4Net {
        // prefix は構築時に 0-32 へ検証済みのため失敗しない
        Ipv4Net::new_assert(Ipv4Addr::from(self.base), self.prefix)
    }
}

impl From<Ipv4Net> for Ipv4Block {
    fn from(net: Ipv4Net) -> Self {
        Ipv4Block {
            base: u32::from(net.network()),
            prefix: net.prefix_len(),
        }
    }
}

impl From<Ipv4Block> for Ipv4Net {
    fn from(block: Ipv4Block) -> Self {
        block.to_ipnet()
    }
}

impl FromStr for Ipv4Block {
    type Err = CidrError;

    /// "A.B.C.D/P" を整列済みブロックとしてパースする。
    /// 非整列の基底アドレスはマスクで切り詰める(127.0.0.1/24 → 127.0.0.0/24)。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr_str, prefix_str) = s
            .split_once('/')
            .ok_or_else(|| CidrError::FormatError(format!("CIDR must be ADDR/PREFIX: {s}")))?;
        let addr = parse_ipv4(addr_str)?;
        let prefix = prefix_str.parse::<u32>()?;
        if prefix > 32 {
            return Err(CidrError::PrefixOutOfRange(prefix));
        }
        Ipv4Block::aligned(addr, prefix as u8)
    }
}

impl fmt::Display for Ipv4Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", Ipv4Addr::from(self.base), self.prefix)
    }
}

/// アドレス ip がCIDR表記ブロックに含まれるかを返す。
/// 判定は必ず整列後のブロック区間に対して行う。
/// 例: 127.0.0.1/24 は 127.0.0.0/24 に正規化してから判定する。
pub fn ip_within_block(ip: &str, cidr_text: &str) -> Result<bool, CidrError> {
    let addr = parse_ipv4(ip)?;
    let block = cidr_text.parse::<Ipv4Block>()?;
    Ok(block.contains(addr))
}

/// CIDR表記のブロックを(先頭, 末尾)のアドレス文字列ペアへ展開する。
pub fn block_to_range(cidr_text: &str) -> Result<(String, String), CidrError> {
    let block = cidr_text.parse::<Ipv4Block>()?;
    let (start, end) = block.range();
    Ok((format_ipv4(start), format_ipv4(end)))
}
