extern crate std;

use super::*;
use crate::report_sink_test_stub::RecordingSink;

macro_rules! setup {
    ($sink:ident, $rep:ident: $b:block) => {{
        let wheel = Wheel::new();
        let $sink = RecordingSink::default();
        #[allow(unused_mut)]
        let mut $rep = Reporter::new($sink.clone(), &wheel);
        $b
    }};
}

#[test]
fn rollover_preserves_press_order() {
    setup!(sink, rep: {
        rep.key_down(0x04);
        rep.key_down(0x05);
        rep.key_down(0x06);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0, 0, 4, 5, 6, 0, 0, 0]);

        rep.key_up(0x05);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0, 0, 4, 6, 0, 0, 0, 0]);
    });
}

#[test]
fn repeated_down_is_ignored() {
    setup!(sink, rep: {
        rep.key_down(0x04);
        rep.key_down(0x04);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0, 0, 4, 0, 0, 0, 0, 0]);

        rep.key_up(0x04);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0; 8]);
    });
}

#[test]
fn modifier_and_extra_bits() {
    setup!(sink, rep: {
        rep.key_down(0xe0);
        rep.key_down(0xe5);
        rep.key_down(0xf1);
        rep.key_down(0xf3);
        rep.flush();
        let reports = sink.take();
        assert_eq!(reports[0].1, [0b0010_0001, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(reports[1].1, [0b0000_1010, 0, 0, 0, 0, 0, 0, 0]);

        rep.key_up(0xe0);
        rep.key_up(0xf3);
        rep.flush();
        let reports = sink.take();
        assert_eq!(reports[0].1, [0b0010_0000, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(reports[1].1, [0b0000_0010, 0, 0, 0, 0, 0, 0, 0]);
    });
}

#[test]
fn seventh_key_reports_phantom_state() {
    setup!(sink, rep: {
        for code in 4..10 {
            rep.key_down(code);
        }
        rep.key_down(0xe1);
        rep.key_down(10);
        rep.flush();
        // every slot phantom, modifiers still live
        assert_eq!(sink.take()[0].1, [2, 0, 1, 1, 1, 1, 1, 1]);
    });
}

#[test]
fn overflow_clears_on_any_tracked_release() {
    setup!(sink, rep: {
        for code in 4..10 {
            rep.key_down(code);
        }
        rep.key_down(10);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0, 0, 1, 1, 1, 1, 1, 1]);

        // The seventh key was never tracked, so releasing it leaves the
        // phantom state latched.
        rep.key_up(10);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0, 0, 1, 1, 1, 1, 1, 1]);

        // Releasing any tracked key clears it, even though the seventh key
        // may still be held.
        rep.key_up(4);
        rep.flush();
        assert_eq!(sink.take()[0].1, [0, 0, 5, 6, 7, 8, 9, 0]);
    });
}

#[test]
fn wheel_value_lands_in_extra_report() {
    let wheel = Wheel::new();
    let sink = RecordingSink::default();
    let mut rep = Reporter::new(sink.clone(), &wheel);

    wheel.add(5);
    rep.flush();
    assert_eq!(sink.take()[1].1, [0, 0, 5, 0, 0, 0, 0, 0]);

    // the accumulator is free-running, not cleared by a flush
    wheel.add(-7);
    rep.flush();
    assert_eq!(sink.take()[1].1, [0, 0, 0xfe, 0, 0, 0, 0, 0]);
}

#[test]
fn output_report_drives_indicators() {
    let pool = FramePool::new();
    let bright = pool.brightness() as u16;

    output_report(&[0b0101], &pool);
    assert_eq!(pool.plane(0, 0).load(205), 255 * bright); // Num-Lock on
    assert_eq!(pool.plane(0, 0).load(141), 255 * bright); // Scroll-Lock on
    assert_eq!(pool.plane(0, 0).load(173), 0); // Caps-Lock off

    output_report(&[0], &pool);
    assert_eq!(pool.plane(0, 0).load(205), 0);
    assert_eq!(pool.plane(0, 0).load(141), 0);
}
