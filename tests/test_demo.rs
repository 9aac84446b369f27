use bitops::demo;

const EXPECTED_TRANSCRIPT: &str = "\
AND:
006 = 00000110
006 = 00000110
-------------
006 = 00000110

OR:
006 = 00000110
006 = 00000110
-------------
006 = 00000110

XOR:
006 = 00000110
006 = 00000110
-------------
000 = 00000000

NOT:
004 = 00000100
--------------
251 = 11111011

SHIFT LEFT
004 = 00000100
--------------
032 = 00100000

SHIFT RIGHT
004 = 00000100
--------------
001 = 00000001
";

#[test]
fn demo_produces_exact_transcript() {
    let mut out = Vec::new();
    demo::run(&mut out).unwrap();
    assert_eq!(std::str::from_utf8(&out).unwrap(), EXPECTED_TRANSCRIPT);
}

#[test]
fn demo_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    demo::run(&mut first).unwrap();
    demo::run(&mut second).unwrap();
    assert_eq!(first, second);
}
