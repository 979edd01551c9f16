//! Detail modal state: which vehicle is on display and whether the dialog is open.
//!
//! Nothing in here touches the DOM. The modal component feeds clicks and key
//! presses in as [`ModalAction`]s and renders whatever [`ModalState`] says.

use log::debug;

pub const ATTR_NAME: &str = "data-name";
pub const ATTR_DESCRIPTION: &str = "data-description";
pub const ATTR_YEAR: &str = "data-year";
pub const ATTR_ENGINE: &str = "data-engine";
pub const ATTR_FUEL: &str = "data-fuel";
pub const ATTR_PRICE: &str = "data-price";
pub const ATTR_IMAGE: &str = "data-img";

pub const FALLBACK_NAME: &str = "Selected vehicle";
pub const FALLBACK_DESCRIPTION: &str = "Discover more about this premium vehicle.";
pub const FALLBACK_SPEC: &str = "—";
pub const FALLBACK_SELECTION: &str = "the selected vehicle";

/// Raw vehicle data as found on a card. Every field may be missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    pub name: Option<String>,
    pub description: Option<String>,
    pub year: Option<String>,
    pub engine: Option<String>,
    pub fuel: Option<String>,
    pub price: Option<String>,
    pub image_url: Option<String>,
}

impl Item {
    /// Reads an item through an attribute lookup, e.g. `|key| card.get_attribute(key)`.
    /// Empty attributes count as missing.
    pub fn from_attributes<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.is_empty());
        Item {
            name: read(ATTR_NAME),
            description: read(ATTR_DESCRIPTION),
            year: read(ATTR_YEAR),
            engine: read(ATTR_ENGINE),
            fuel: read(ATTR_FUEL),
            price: read(ATTR_PRICE),
            image_url: read(ATTR_IMAGE),
        }
    }
}

/// What the modal actually shows, with fallbacks already applied.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailView {
    pub title: String,
    pub description: String,
    pub year: String,
    pub engine: String,
    pub fuel: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl DetailView {
    pub fn resolve(item: &Item) -> Self {
        let or = |value: &Option<String>, fallback: &str| {
            value.clone().unwrap_or_else(|| fallback.to_string())
        };
        DetailView {
            title: or(&item.name, FALLBACK_NAME),
            description: or(&item.description, FALLBACK_DESCRIPTION),
            year: or(&item.year, FALLBACK_SPEC),
            engine: or(&item.engine, FALLBACK_SPEC),
            fuel: or(&item.fuel, FALLBACK_SPEC),
            price: or(&item.price, FALLBACK_SPEC),
            image_url: item.image_url.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalAction {
    Open(Item),
    Close,
    /// A click that reached the modal container. Only closes when the
    /// container itself was clicked, not the dialog inside it.
    Backdrop { target_is_backdrop: bool },
    Escape,
    /// Booking a test drive. The caller takes [`ModalState::confirm_message`]
    /// before dispatching; the state itself only closes.
    Confirm,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    phase: ModalPhase,
    view: Option<DetailView>,
}

impl ModalState {
    #[cfg(test)]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == ModalPhase::Open
    }

    /// The last opened view. Kept after closing so the fade-out still has content.
    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.view.as_ref().map(|view| view.title.as_str())
    }

    /// Replaces the whole view with `item` and opens the dialog.
    pub fn open(&mut self, item: &Item) {
        let view = DetailView::resolve(item);
        debug!("Opening details for {}", view.title);
        self.view = Some(view);
        self.phase = ModalPhase::Open;
    }

    /// Returns false when the modal was already closed.
    pub fn close(&mut self) -> bool {
        if self.phase == ModalPhase::Closed {
            return false;
        }
        debug!("Closing details modal");
        self.phase = ModalPhase::Closed;
        true
    }

    /// Toast text for booking the current selection.
    pub fn confirm_message(&self) -> String {
        test_drive_message(self.selected_name())
    }

    pub fn apply(&mut self, action: ModalAction) {
        match action {
            ModalAction::Open(item) => self.open(&item),
            ModalAction::Close => {
                self.close();
            }
            ModalAction::Backdrop { target_is_backdrop } => {
                if target_is_backdrop {
                    self.close();
                }
            }
            ModalAction::Escape => {
                if self.is_open() {
                    self.close();
                }
            }
            ModalAction::Confirm => {
                self.close();
            }
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    /// Value for `document.body.style.overflow`.
    pub fn body_overflow(&self) -> &'static str {
        if self.is_open() {
            "hidden"
        } else {
            ""
        }
    }
}

/// True only when the click landed on the backdrop itself. Clicks inside the
/// dialog bubble up with a different target and leave the modal open.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    match (target, backdrop) {
        (Some(target), Some(backdrop)) => target == backdrop,
        _ => false,
    }
}

pub fn test_drive_message(model: Option<&str>) -> String {
    let model = model.filter(|name| !name.is_empty()).unwrap_or(FALLBACK_SELECTION);
    format!("Test drive booked for {}", model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_item(name: &str) -> Item {
        Item {
            name: Some(name.to_string()),
            description: Some(format!("{} description", name)),
            year: Some("2024".to_string()),
            engine: Some("V8 4.0L".to_string()),
            fuel: Some("Petrol".to_string()),
            price: Some("$120,000".to_string()),
            image_url: Some(format!("/assets/{}.jpg", name)),
        }
    }

    #[test]
    fn open_copies_every_field() {
        let mut state = ModalState::default();
        state.open(&full_item("GT"));

        let view = state.view().unwrap();
        assert!(state.is_open());
        assert_eq!(view.title, "GT");
        assert_eq!(view.description, "GT description");
        assert_eq!(view.year, "2024");
        assert_eq!(view.engine, "V8 4.0L");
        assert_eq!(view.fuel, "Petrol");
        assert_eq!(view.price, "$120,000");
        assert_eq!(view.image_url.as_deref(), Some("/assets/GT.jpg"));
    }

    #[test]
    fn missing_fields_use_fallbacks() {
        let mut state = ModalState::default();
        state.open(&Item::default());

        let view = state.view().unwrap();
        assert_eq!(view.title, FALLBACK_NAME);
        assert_eq!(view.description, FALLBACK_DESCRIPTION);
        assert_eq!(view.year, FALLBACK_SPEC);
        assert_eq!(view.engine, FALLBACK_SPEC);
        assert_eq!(view.fuel, FALLBACK_SPEC);
        assert_eq!(view.price, FALLBACK_SPEC);
        assert_eq!(view.image_url, None);
    }

    #[test]
    fn attributes_treat_empty_as_missing() {
        let attrs: HashMap<&str, &str> =
            [(ATTR_NAME, "Panigale V4"), (ATTR_YEAR, ""), (ATTR_FUEL, "Petrol")]
                .into_iter()
                .collect();
        let item = Item::from_attributes(|key| attrs.get(key).map(|v| v.to_string()));

        assert_eq!(item.name.as_deref(), Some("Panigale V4"));
        assert_eq!(item.year, None);
        assert_eq!(item.fuel.as_deref(), Some("Petrol"));
        assert_eq!(item.engine, None);
    }

    #[test]
    fn reopening_never_mixes_items() {
        let mut state = ModalState::default();
        state.open(&full_item("GT"));
        state.close();
        state.open(&Item {
            name: Some("EQS".to_string()),
            ..Item::default()
        });

        let view = state.view().unwrap();
        assert_eq!(view.title, "EQS");
        assert_eq!(view.year, FALLBACK_SPEC);
        assert_eq!(view.price, FALLBACK_SPEC);
        assert_eq!(view.image_url, None);
    }

    #[test]
    fn backdrop_closes_only_on_itself() {
        let mut state = ModalState::default();
        state.open(&full_item("GT"));

        state.apply(ModalAction::Backdrop { target_is_backdrop: false });
        assert!(state.is_open());

        state.apply(ModalAction::Backdrop { target_is_backdrop: true });
        assert!(!state.is_open());
    }

    #[test]
    fn escape_while_closed_changes_nothing() {
        let mut state = ModalState::default();
        let before = state.clone();
        state.apply(ModalAction::Escape);
        assert_eq!(state, before);

        state.open(&full_item("GT"));
        state.close();
        let before = state.clone();
        state.apply(ModalAction::Escape);
        assert_eq!(state, before);
    }

    #[test]
    fn escape_closes_open_modal() {
        let mut state = ModalState::default();
        state.open(&full_item("GT"));
        state.apply(ModalAction::Escape);
        assert_eq!(state.phase(), ModalPhase::Closed);
        assert_eq!(state.body_overflow(), "");
        assert_eq!(state.aria_hidden(), "true");
    }

    #[test]
    fn open_locks_body_scroll() {
        let mut state = ModalState::default();
        state.apply(ModalAction::Open(full_item("GT")));
        assert_eq!(state.body_overflow(), "hidden");
        assert_eq!(state.aria_hidden(), "false");
    }

    #[test]
    fn confirm_names_the_model_and_closes() {
        let mut state = ModalState::default();
        state.open(&full_item("Model X"));

        let message = state.confirm_message();
        state.apply(ModalAction::Confirm);
        assert!(message.contains("Model X"));
        assert!(!state.is_open());
        assert_eq!(state.confirm_message(), message);
    }

    #[test]
    fn confirm_without_selection_uses_generic_phrase() {
        let mut state = ModalState::default();
        let message = state.confirm_message();
        state.apply(ModalAction::Confirm);
        assert_eq!(message, "Test drive booked for the selected vehicle");
        assert!(!state.is_open());
    }

    #[test]
    fn backdrop_click_needs_the_backdrop_as_target() {
        // Stand-ins for DOM nodes: the container and the dialog inside it.
        let backdrop = "details-modal";
        let dialog = "details-dialog";

        assert!(is_backdrop_click(Some(&backdrop), Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&dialog), Some(&backdrop)));
        assert!(!is_backdrop_click(None, Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&backdrop), None));
    }

    #[test]
    fn bubbled_inner_click_keeps_modal_open() {
        let mut state = ModalState::default();
        state.open(&full_item("GT"));
        let (backdrop, dialog) = ("details-modal", "details-dialog");

        let target_is_backdrop = is_backdrop_click(Some(&dialog), Some(&backdrop));
        state.apply(ModalAction::Backdrop { target_is_backdrop });
        assert!(state.is_open());

        let target_is_backdrop = is_backdrop_click(Some(&backdrop), Some(&backdrop));
        state.apply(ModalAction::Backdrop { target_is_backdrop });
        assert!(!state.is_open());
    }

    #[test]
    fn close_twice_reports_no_change() {
        let mut state = ModalState::default();
        state.open(&full_item("GT"));
        assert!(state.close());
        assert!(!state.close());
    }
}
