mod alert_popup;
mod balance_card;
mod footer_bar;
mod form;
mod header_bar;
mod input;
mod load_view;
mod transaction_list;

pub use alert_popup::AlertPopup;
pub use balance_card::{BALANCE_CARD_HEIGHT, BalanceCard};
pub use footer_bar::{BACK_HOME, FooterBar, FooterBarStyle, KeyHint};
pub use form::{FIELD_HEIGHT, Form, FormAction};
pub use header_bar::{
    HeaderBar, HeaderBarStyle, HeaderMenu, HeaderMenuAction, HeaderMenuState, MENU_KEY, MenuItem,
};
pub use input::{InputMask, TextInput};
pub use load_view::{LOADING_TEXT, placeholder};
pub use transaction_list::TransactionList;
