pub mod accounts;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod nav;
pub mod portal;
pub mod storage;
pub mod timer;
pub mod transition;
pub mod validate;
