use super::*;

#[test]
fn usage_codes() {
    assert_eq!(key_code(MatrixPos::new(0, 0)), 0x3a);
    assert_eq!(key_code(MatrixPos::new(13, 0)), 0xe0);
    assert_eq!(key_code(MatrixPos::new(7, 1)), 0x16);
    assert_eq!(key_code(MatrixPos::new(13, 8)), 0x58);
    assert_eq!(key_code(MatrixPos::new(14, 0)), 0);
}

#[test]
fn key_led_groups() {
    assert_eq!(key_led(MatrixPos::new(0, 0)), KeyLed::Single(0x40));
    assert_eq!(key_led(MatrixPos::new(3, 7)), KeyLed::Group(&[0x8d, 0x8b]));
    assert_eq!(key_led(MatrixPos::new(2, 7)), KeyLed::Group(&[0x8e, 0x8a]));
    assert_eq!(key_led(MatrixPos::new(2, 8)), KeyLed::Group(&[0x8f, 0x89]));
    assert_eq!(
        key_led(MatrixPos::new(0, 8)),
        KeyLed::Group(&[0x85, 0x86, 0x88, 0x87])
    );
    assert_eq!(key_led(MatrixPos::new(0, 7)), KeyLed::None);
}

#[test]
fn light_key_is_silent() {
    assert_eq!(key_code(LIGHT_KEY), 0);
    assert_eq!(key_led(LIGHT_KEY), KeyLed::None);
}

#[test]
fn channel_order_covers_all_wiring_classes() {
    assert_eq!(channel_order(0x00), ChannelOrder::Gbr);
    assert_eq!(channel_order(0x10), ChannelOrder::Rgb);
    assert_eq!(channel_order(0x18), ChannelOrder::Brg);
    assert_eq!(channel_order(0x23), ChannelOrder::Brg);
    assert_eq!(channel_order(0x8f), ChannelOrder::Gbr);

    assert_eq!(ChannelOrder::Rgb.arrange(1, 2, 3), [1, 2, 3]);
    assert_eq!(ChannelOrder::Brg.arrange(1, 2, 3), [3, 1, 2]);
    assert_eq!(ChannelOrder::Gbr.arrange(1, 2, 3), [2, 3, 1]);
}
