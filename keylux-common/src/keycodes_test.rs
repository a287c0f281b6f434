use super::*;

#[test]
fn classify() {
    assert_eq!(KeyClass::of(0x00), KeyClass::Unmapped);
    assert_eq!(KeyClass::of(0x01), KeyClass::Basic);
    assert_eq!(KeyClass::of(0x3a), KeyClass::Basic);
    assert_eq!(KeyClass::of(0xdf), KeyClass::Basic);
    assert_eq!(KeyClass::of(0xe0), KeyClass::Modifier);
    assert_eq!(KeyClass::of(0xe7), KeyClass::Modifier);
    assert_eq!(KeyClass::of(0xf0), KeyClass::Extra);
    assert_eq!(KeyClass::of(0xf7), KeyClass::Extra);
}

#[test]
fn reserved_gaps_do_not_report() {
    for code in 0xe8..=0xef {
        assert_eq!(KeyClass::of(code), KeyClass::Unmapped);
    }
    for code in 0xf8..=0xff {
        assert_eq!(KeyClass::of(code), KeyClass::Unmapped);
    }
}
