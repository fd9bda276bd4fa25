//! Shared application context

use std::rc::Rc;

use smartfolders_common::config::UiConfig;
use smartfolders_common::store::NoteStore;
use yew::prelude::*;

/// Injected data provider
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn NoteStore>);

impl StoreHandle {
    pub fn new(store: impl NoteStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::ops::Deref for StoreHandle {
    type Target = dyn NoteStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub store: StoreHandle,
    pub config: UseStateHandle<UiConfig>,
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext is provided by App")
}
