extern crate std;

use std::vec::Vec;

use crate::{
    frame_pool::{Plane, PAGE_WORDS},
    transmit::{LedBus, CONTROL_WORDS},
};

/// Records streamed pages and control bursts for assertions.
#[derive(Default)]
pub struct RecordingBus {
    pub pages: Vec<[u16; PAGE_WORDS]>,
    pub controls: Vec<[u16; CONTROL_WORDS]>,
}

impl LedBus for RecordingBus {
    fn stream_page(&mut self, words: &Plane) {
        let mut page = [0u16; PAGE_WORDS];
        for (i, word) in page.iter_mut().enumerate() {
            *word = words.load(i);
        }
        self.pages.push(page);
    }

    fn send_control(&mut self, packet: &[u16; CONTROL_WORDS]) {
        self.controls.push(*packet);
    }
}
