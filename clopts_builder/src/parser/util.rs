use std::cell::RefCell;
use std::rc::Rc;

use crate::parser::{ParseError, UserInterface};

#[derive(Default)]
pub(crate) struct InMemoryInterface {
    message: RefCell<Option<String>>,
    error: RefCell<Option<String>>,
}

impl InMemoryInterface {
    pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
        let InMemoryInterface { message, error } = self;
        (message.into_inner(), error.into_inner())
    }

    pub(crate) fn consume_message(self) -> String {
        self.message
            .into_inner()
            .expect("internal error - InMemoryInterface has no message")
    }
}

impl UserInterface for InMemoryInterface {
    fn print(&self, message: String) {
        assert!(self.message.replace(Some(message)).is_none());
    }

    fn print_error(&self, error: ParseError) {
        assert!(self.error.replace(Some(error.to_string())).is_none());
    }
}

/// A shareable handle, so tests may inspect what a `GeneralParser` printed after it is consumed.
#[derive(Clone, Default)]
pub(crate) struct SharedInterface(Rc<InMemoryInterface>);

impl SharedInterface {
    pub(crate) fn consume(self) -> (Option<String>, Option<String>) {
        match Rc::try_unwrap(self.0) {
            Ok(interface) => interface.consume(),
            Err(_) => panic!("internal error - SharedInterface is still shared"),
        }
    }
}

impl UserInterface for SharedInterface {
    fn print(&self, message: String) {
        self.0.print(message);
    }

    fn print_error(&self, error: ParseError) {
        self.0.print_error(error);
    }
}
