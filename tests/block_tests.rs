use cidr_math::addr::parse_ipv4;
use cidr_math::block::{Ipv4Block, block_to_range, ip_within_block};
use cidr_math::error::CidrError;
use ipnet::Ipv4Net;
use quickcheck_macros::quickcheck;
use std::net::Ipv4Addr;

#[test]
fn aligned_truncates_host_bits() {
    let addr = parse_ipv4("127.0.0.1").unwrap();
    let block = Ipv4Block::aligned(addr, 24).unwrap();
    assert_eq!(block.base(), parse_ipv4("127.0.0.0").unwrap());
    assert_eq!(block.prefix(), 24);
    assert_eq!(block.to_string(), "127.0.0.0/24");

    // /32 は切り詰めなし
    let block = Ipv4Block::aligned(addr, 32).unwrap();
    assert_eq!(block.base(), addr);
}

#[test]
fn parses_and_normalizes_cidr_text() {
    // 非整列の基底アドレスは正規化される
    let block: Ipv4Block = "127.0.0.1/24".parse().unwrap();
    assert_eq!(block.to_string(), "127.0.0.0/24");

    // 整列済みなら表示と往復する
    let block: Ipv4Block = "10.1.2.0/24".parse().unwrap();
    assert_eq!(block.to_string(), "10.1.2.0/24");
}

#[test]
fn rejects_malformed_cidr_text() {
    // スラッシュなし
    let e = "1.2.3.4".parse::<Ipv4Block>().unwrap_err();
    assert!(matches!(e, CidrError::FormatError(_)));

    // プレフィックスが範囲外
    let e = "1.2.3.4/33".parse::<Ipv4Block>().unwrap_err();
    assert!(matches!(e, CidrError::PrefixOutOfRange(33)));

    // プレフィックスが非数値
    let e = "1.2.3.4/ab".parse::<Ipv4Block>().unwrap_err();
    assert!(matches!(e, CidrError::ParseIntError(_)));

    // アドレス部が不正
    let e = "300.0.0.1/8".parse::<Ipv4Block>().unwrap_err();
    assert!(matches!(e, CidrError::AddrParseError(_)));
}

#[test]
fn block_range_endpoints() {
    // 127.0.0.128/25 → [127.0.0.128, 127.0.0.255]
    let (lo, hi) = block_to_range("127.0.0.128/25").unwrap();
    assert_eq!(lo, "127.0.0.128");
    assert_eq!(hi, "127.0.0.255");

    // /0 はアドレス空間全体(prefix=0でも溢れない)
    let block: Ipv4Block = "0.0.0.0/0".parse().unwrap();
    assert_eq!(block.range(), (0, u32::MAX));

    // /32 は単一アドレス
    let block: Ipv4Block = "10.0.0.7/32".parse().unwrap();
    assert_eq!(block.range(), (parse_ipv4("10.0.0.7").unwrap(), parse_ipv4("10.0.0.7").unwrap()));
}

#[test]
fn contains_is_inclusive_both_ends() {
    let block: Ipv4Block = "127.0.0.0/27".parse().unwrap();
    assert!(block.contains(parse_ipv4("127.0.0.0").unwrap()));
    assert!(block.contains(parse_ipv4("127.0.0.31").unwrap()));
    assert!(!block.contains(parse_ipv4("127.0.0.32").unwrap()));
    assert!(!block.contains(parse_ipv4("126.255.255.255").unwrap()));
}

#[test]
fn ip_within_block_uses_aligned_range() {
    // 127.0.0.1/24 は 127.0.0.0/24 として判定される
    assert!(ip_within_block("127.0.0.33", "127.0.0.1/24").unwrap());
    // 127.0.0.1/27 → 127.0.0.0/27 = [.0, .31] なので .33 は外
    assert!(!ip_within_block("127.0.0.33", "127.0.0.1/27").unwrap());
}

#[test]
fn converts_to_and_from_ipnet() {
    let block: Ipv4Block = "192.168.0.0/16".parse().unwrap();
    let net = block.to_ipnet();
    assert_eq!(net, Ipv4Net::new(Ipv4Addr::new(192, 168, 0, 0), 16).unwrap());
    assert_eq!(Ipv4Block::from(net), block);

    // ホストビット付きの Ipv4Net はネットワークアドレスへ切り詰められる
    let net: Ipv4Net = "192.168.1.7/24".parse().unwrap();
    assert_eq!(Ipv4Block::from(net).to_string(), "192.168.1.0/24");
}

// 含有判定は区間 [先頭, 末尾] への所属と同値
#[quickcheck]
fn containment_matches_range_membership(base: u32, prefix: u8, addr: u32) -> bool {
    let block = Ipv4Block::aligned(base, prefix % 33).unwrap();
    let (lo, hi) = block.range();
    block.contains(addr) == (lo <= addr && addr <= hi)
}
