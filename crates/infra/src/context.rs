// crates/infra/src/context.rs
use length_rules_ports::{MessageFormatter, ValidationContext};

/// Validation context for one property of one parent object.
#[derive(Debug)]
pub struct PropertyContext<'a, T: ?Sized> {
    instance: &'a T,
    formatter: MessageFormatter,
}

impl<'a, T: ?Sized> PropertyContext<'a, T> {
    pub fn new(instance: &'a T) -> Self {
        Self { instance, formatter: MessageFormatter::new() }
    }

    pub fn formatter(&self) -> &MessageFormatter {
        &self.formatter
    }

    pub fn into_formatter(self) -> MessageFormatter {
        self.formatter
    }
}

impl<T: ?Sized> ValidationContext<T> for PropertyContext<'_, T> {
    fn instance_to_validate(&self) -> &T {
        self.instance
    }

    fn message_formatter(&mut self) -> &mut MessageFormatter {
        &mut self.formatter
    }
}
