mod alert;
mod button;
mod modal;
mod spinner;
mod toast;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use modal::{ConfirmDialog, Confirmation, Modal};
pub(crate) use spinner::Spinner;
pub(crate) use toast::{NotificationProvider, Notifications, use_notifications};
