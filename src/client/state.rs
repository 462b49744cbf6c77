use crate::types::item::{Item, RItemBody};

pub const FETCH_FAILED: &str = "Failed to fetch inventory. Please try again.";
pub const OPERATION_FAILED: &str = "Operation failed. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete item. Please try again.";

/// The shared create/edit form. Quantity is kept as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub name: String,
    pub quantity: String,
}

impl ItemForm {
    pub fn from_item(item: &Item) -> Self {
        ItemForm {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
        }
    }

    pub fn to_body(&self) -> RItemBody {
        RItemBody::new(self.name.clone(), self.quantity.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode<'a> {
    Create,
    Editing(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientState {
    pub items: Vec<Item>,
    pub form: ItemForm,
    pub editing: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for ClientState {
    // The first fetch starts immediately, so begin in the loading state.
    fn default() -> Self {
        ClientState {
            items: Vec::new(),
            form: ItemForm::default(),
            editing: None,
            loading: true,
            error: None,
        }
    }
}

impl ClientState {
    pub fn mode(&self) -> FormMode<'_> {
        match &self.editing {
            Some(id) => FormMode::Editing(id),
            None => FormMode::Create,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    FetchStarted,
    FetchSucceeded(Vec<Item>),
    FetchFailed,
    NameChanged(String),
    QuantityChanged(String),
    EditRequested(Item),
    EditCancelled,
    SubmitSucceeded,
    SubmitFailed,
    DeleteFailed,
}

pub fn reduce(state: ClientState, action: Action) -> ClientState {
    match action {
        Action::FetchStarted => ClientState { loading: true, ..state },
        Action::FetchSucceeded(items) => ClientState {
            items,
            loading: false,
            error: None,
            ..state
        },
        Action::FetchFailed => ClientState {
            loading: false,
            error: Some(FETCH_FAILED.to_string()),
            ..state
        },
        Action::NameChanged(name) => ClientState {
            form: ItemForm { name, ..state.form },
            ..state
        },
        Action::QuantityChanged(quantity) => ClientState {
            form: ItemForm { quantity, ..state.form },
            ..state
        },
        Action::EditRequested(item) => ClientState {
            form: ItemForm::from_item(&item),
            editing: Some(item.id),
            ..state
        },
        Action::EditCancelled | Action::SubmitSucceeded => ClientState {
            form: ItemForm::default(),
            editing: None,
            ..state
        },
        Action::SubmitFailed => ClientState {
            error: Some(OPERATION_FAILED.to_string()),
            ..state
        },
        Action::DeleteFailed => ClientState {
            error: Some(DELETE_FAILED.to_string()),
            ..state
        },
    }
}
