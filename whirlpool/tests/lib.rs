use digest::dev::fixed_reset_test;
use hex_literal::hex;
use whirlpool::{Digest, Whirlpool, WhirlpoolHash};

fn check(input: &[u8], expected: &[u8]) {
    if let Some(desc) = fixed_reset_test::<Whirlpool>(input, expected) {
        panic!("len={}: {}", input.len(), desc);
    }
    assert_eq!(WhirlpoolHash::digest(input).as_bytes()[..], expected[..]);
}

/// Bytes `0, 1, 2, ..` wrapping at 256.
fn counting(len: usize) -> Vec<u8> {
    (0..len).map(|i| i as u8).collect()
}

#[test]
fn nessie_empty() {
    check(
        b"",
        &hex!(
            "19fa61d75522a4669b44e39c1d2e1726c530232130d407f89afee0964997f7a7"
            "3e83be698b288febcf88e3e03c4f0757ea8964e59b63d93708b138cc42a66eb3"
        ),
    );
}

#[test]
fn nessie_a() {
    check(
        b"a",
        &hex!(
            "8aca2602792aec6f11a67206531fb7d7f0dff59413145e6973c45001d0087b42"
            "d11bc645413aeff63a42391a39145a591a92200d560195e53b478584fdae231a"
        ),
    );
}

#[test]
fn nessie_abc() {
    check(
        b"abc",
        &hex!(
            "4e2448a4c6f486bb16b6562c73b4020bf3043e3a731bce721ae1b303d97e6d4c"
            "7181eebdb6c57e277d0e34957114cbd6c797fc9d95d8b582d225292076d4eef5"
        ),
    );
}

#[test]
fn nessie_message_digest() {
    check(
        b"message digest",
        &hex!(
            "378c84a4126e2dc6e56dcc7458377aac838d00032230f53ce1f5700c0ffb4d3b"
            "8421557659ef55c106b4b52ac5a4aaa692ed920052838f3362e86dbd37a8903e"
        ),
    );
}

#[test]
fn nessie_alphabet() {
    check(
        b"abcdefghijklmnopqrstuvwxyz",
        &hex!(
            "f1d754662636ffe92c82ebb9212a484a8d38631ead4238f5442ee13b8054e41b"
            "08bf2a9251c30b6a0b8aae86177ab4a6f68f673e7207865d5d9819a3dba4eb3b"
        ),
    );
}

#[test]
fn nessie_alphanumeric() {
    check(
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
        &hex!(
            "dc37e008cf9ee69bf11f00ed9aba26901dd7c28cdec066cc6af42e40f82f3a1e"
            "08eba26629129d8fb7cb57211b9281a65517cc879d7b962142c65f5a7af01467"
        ),
    );
}

#[test]
fn nessie_digits() {
    check(
        b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
        &hex!(
            "466ef18babb0154d25b9d38a6414f5c08784372bccb204d6549c4afadb601429"
            "4d5bd8df2a6c44e538cd047b2681a51a2c60481e88c5a20b2c2a80cf3a9a083b"
        ),
    );
}

#[test]
fn nessie_quick_fox() {
    check(
        b"The quick brown fox jumps over the lazy dog",
        &hex!(
            "b97de512e91e3828b40d2b0fdce9ceb3c4a71f9bea8d88e75c4fa854df36725f"
            "d2b52eb6544edcacd6f8beddfea403cb55ae31f03ad62a5ef54e42ee82c3fb35"
        ),
    );
}

#[test]
fn nessie_quick_fox_period() {
    check(
        b"The quick brown fox jumps over the lazy dog.",
        &hex!(
            "87a7ff096082e3ffeb86db10feb91c5af36c2c71bc426fe310ce662e0338223e"
            "217def0eab0b02b80eecf875657802bc5965e48f5c0a05467756f0d3f396faba"
        ),
    );
}

// 31 bytes plus the padding byte leave exactly 32 bytes for the length;
// from 32 bytes on the length spills into an extra block.
#[test]
fn zeros_31_bytes() {
    check(
        &[0u8; 31],
        &hex!(
            "3e3f188f8febbeb17a933feaf7fe53a4858d80c915ad6a1418f0318e68d49b4e"
            "459223cd414e0fbc8a57578fd755d86e827abef4070fc1503e25d99e382f72ba"
        ),
    );
}

#[test]
fn counting_31_bytes() {
    check(
        &counting(31),
        &hex!(
            "58bee92be003ccc34f9ce8c0b323c6baf1297460baab4998cb3b52d2bbaa24d1"
            "b06cb597eb2e609a008572ff93710e3a7f42ac53e3ff09d4733757eaca41e20c"
        ),
    );
}

#[test]
fn zeros_32_bytes() {
    check(
        &[0u8; 32],
        &hex!(
            "961b5f299f750f880fca004bdf2882e2fe1b491b0c0ee7e2b514c5dfdd53292d"
            "bdbee17e6d3bb5824cdec1867cc7090963be8fff0c1d8ed5864e07cacb50d68a"
        ),
    );
}

#[test]
fn counting_32_bytes() {
    check(
        &counting(32),
        &hex!(
            "888aeb1be2becb28598556a128afea037d0689c8d13d9894f1416b2c48b2551c"
            "b2fda321a26cc4d7e1c87332d7a3c18ffb455c92c0e7aaf829fa40b8a28bb656"
        ),
    );
}

#[test]
fn zeros_33_bytes() {
    check(
        &[0u8; 33],
        &hex!(
            "54a9c8784dbf6c2618ca32057b76b9d6733c19f4a377cb7e892d057bf73e83fb"
            "af6ac147a65fef0991dc296955440ad0b793f81c5cf71e29669ce3f19195aaf7"
        ),
    );
}

#[test]
fn counting_33_bytes() {
    check(
        &counting(33),
        &hex!(
            "19099b4e8abf225dc7bd1c1dc6d52f54e8fb7e4eae0ab19293c686e6fd282822"
            "1a1153bba4c143795d1a718585d9255b6dc911c0eda5e0042a10565aa5d6d8e7"
        ),
    );
}

#[test]
fn zeros_63_bytes() {
    check(
        &[0u8; 63],
        &hex!(
            "0fac8ef35b4f7be6e1ac1580eef1a8a90f81e3043cc45e918eda3543d9d4e9e3"
            "aa16c8e5e71bf792f81ca67f625ff98f9ca1eab8fa9b78c9d2e771cf249768dd"
        ),
    );
}

#[test]
fn counting_63_bytes() {
    check(
        &counting(63),
        &hex!(
            "37bf321f66ace827b66ecaa651ccfcad30ab627e717aa4fe441279c4fa48555c"
            "b7784b0af25a73b86375be71a1e3fddec661e0eb8115e0bb2b9a7ff81dc75df9"
        ),
    );
}

#[test]
fn zeros_64_bytes() {
    check(
        &[0u8; 64],
        &hex!(
            "15cfa7c1df8e0d6753d9a9aed0642867e26bb3cf11df7dac96f60c274e060fda"
            "941ec41eaff5f7375f3839632516ae9a831d9f2fbe2bd0ff02e9cf16e99ebd03"
        ),
    );
}

#[test]
fn counting_64_bytes() {
    check(
        &counting(64),
        &hex!(
            "5c3c6f524c8ae1e7a4f76b84977b1560e78eb568e2fd8d72699ad79186481bd4"
            "2b53ab39a0b741d9c098a4ecb01f3eccf3844cf1b73a9355ee5d496a2a1fb5b3"
        ),
    );
}

#[test]
fn zeros_65_bytes() {
    check(
        &[0u8; 65],
        &hex!(
            "85e124c4415bcf4319543e3a63ff571d09354ceebee1e325308c9069f43e2ae4"
            "d0e51d4eb1e8642870194e9530d8d8af6589d1bf6949ddf90a7f1208623795b9"
        ),
    );
}

#[test]
fn counting_65_bytes() {
    check(
        &counting(65),
        &hex!(
            "85a19923268414de6a10a2cdef7917d7aa01e68df9d028cbab5c5236faefced8"
            "36bde9cf90d8a214013056202a1bae5cb73606078c5572d8fe85c36002c92d70"
        ),
    );
}

#[test]
fn zeros_128_bytes() {
    check(
        &[0u8; 128],
        &hex!(
            "a9fddefb75cde5f3cc7ffd5dacfbc269f009d5f452ceef412e0223fb328e190f"
            "c452f33eacf7a47a8ca878fb75b25865e772b32bb054e59eab7586c428de86f8"
        ),
    );
}

#[test]
fn counting_128_bytes() {
    check(
        &counting(128),
        &hex!(
            "803a3b37c89e84fbbec75bee3d00dd728ffc4246b5a5e989dc8dc2cd0f793796"
            "6ab78c79e1d4648ee6eb40f3d70491cb46b8ab42e155672e2ab8374fcf70dd79"
        ),
    );
}

#[test]
fn million_a() {
    let mut hasher = Whirlpool::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(chunk);
    }
    assert_eq!(
        hasher.finalize()[..],
        hex!(
            "0c99005beb57eff50a7cf005560ddf5d29057fd86b20bfd62deca0f1ccea4af5"
            "1fc15490eddc47af32bb2b66c34ff9ad8c6008ad677f77126953b226e4ed8b01"
        )[..]
    );
}

#[test]
fn output_is_always_64_bytes() {
    for len in [0, 1, 31, 32, 33, 63, 64, 65, 1000] {
        assert_eq!(Whirlpool::digest(vec![7u8; len]).len(), 64);
    }
}

#[test]
fn every_split_point_agrees() {
    let msg = counting(200);
    let expected = Whirlpool::digest(&msg);
    for split in 0..=msg.len() {
        let (a, b) = msg.split_at(split);
        let mut hasher = Whirlpool::new();
        hasher.update(a);
        hasher.update(b);
        assert_eq!(hasher.finalize(), expected, "split at {}", split);
    }
}

#[test]
fn byte_at_a_time() {
    let msg = counting(300);
    let mut hasher = Whirlpool::new();
    for b in msg.iter() {
        hasher.update([*b]);
    }
    hasher.update(b"");
    assert_eq!(hasher.finalize(), Whirlpool::digest(&msg));
}

#[test]
fn clone_forks_a_common_prefix() {
    let mut prefix = Whirlpool::new();
    prefix.update(b"The quick brown fox jumps over the lazy dog");
    let mut with_period = prefix.clone();
    with_period.update(b".");

    assert_eq!(
        WhirlpoolHash::from(prefix).to_string(),
        "b97de512e91e3828b40d2b0fdce9ceb3c4a71f9bea8d88e75c4fa854df36725fd2b52eb6544edcacd6f8beddfea403cb55ae31f03ad62a5ef54e42ee82c3fb35"
    );
    assert_eq!(
        WhirlpoolHash::from(with_period).to_string(),
        "87a7ff096082e3ffeb86db10feb91c5af36c2c71bc426fe310ce662e0338223e217def0eab0b02b80eecf875657802bc5965e48f5c0a05467756f0d3f396faba"
    );
}

#[test]
fn finalize_reset_starts_a_new_message() {
    let mut hasher = Whirlpool::new();
    hasher.update(b"abc");
    let first = hasher.finalize_reset();
    let empty = hasher.finalize();
    assert_eq!(first, Whirlpool::digest(b"abc"));
    assert_eq!(empty, Whirlpool::digest(b""));
}
