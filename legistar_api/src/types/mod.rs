mod event;
pub use self::event::Event;

mod event_item;
pub use self::event_item::{EventItem, MatterAttachment};

mod vote;
pub use self::vote::Vote;

mod history;
pub use self::history::MatterHistory;
