//! Plain-text export of a result, handed to the platform share facility.

use core::fmt::Write;

use crate::bmi::BmiResult;
use crate::config::{SHARE_MESSAGE_CAPACITY, SHARE_MESSAGE_PREFIX};

/// Buffer holding one share message.
pub type ShareMessage = heapless::String<SHARE_MESSAGE_CAPACITY>;

/// Platform export facility (share sheet, clipboard, serial link, ...).
pub trait ShareSink {
    fn share(&mut self, text: &str);
}

impl<F: FnMut(&str)> ShareSink for F {
    fn share(&mut self, text: &str) {
        self(text)
    }
}

/// "Hey Guys! Checkout my Body Mass Index: 20.8 BMI, which is considered Normal"
pub fn message(result: &BmiResult) -> ShareMessage {
    let mut out = ShareMessage::new();
    let _ = write!(
        out,
        "{}{:.1} BMI, which is considered {}",
        SHARE_MESSAGE_PREFIX,
        result.value,
        result.category.label()
    );
    out
}
