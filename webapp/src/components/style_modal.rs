use dioxus::prelude::*;

use api::portfolio::{PortfolioItem, PortfolioItemId};

use crate::common::config::use_image_quality;
use crate::common::images::{ImageSize, item_image_at, sized_image_url};
use crate::common::motion::{CARD_STAGGER_MS, FADE_UP};
use crate::components::modal::{ModalSize, ModernModal};

pub const DEFAULT_MAX_SELECTION: usize = 3;

// the picked alternatives, in the order they were picked
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSelection {
    selected: Vec<PortfolioItemId>,
    max: usize,
    // last open flag seen from the parent
    open: bool,
}

impl StyleSelection {
    pub fn new(max: usize) -> Self {
        StyleSelection {
            selected: Vec::new(),
            max,
            open: false,
        }
    }

    // the parent may open or close the modal without going through dismiss,
    // so any change of the open flag or the cap starts over; returns whether
    // the selection was reset
    pub fn sync(&mut self, is_open: bool, max: usize) -> bool {
        if self.open == is_open && self.max == max {
            return false;
        }

        *self = StyleSelection {
            open: is_open,
            ..StyleSelection::new(max)
        };
        true
    }

    pub fn ids(&self) -> &[PortfolioItemId] {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() >= self.max
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    // selected items can always be dropped, others only picked while there is room
    pub fn can_toggle(&self, id: &str) -> bool {
        self.is_selected(id) || !self.is_full()
    }

    // returns whether anything changed
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
            true
        } else if !self.is_full() {
            self.selected.push(id.to_owned());
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    // reports the picks, then empties, then closes
    pub fn confirm(&mut self, on_confirm: impl FnOnce(Vec<PortfolioItemId>), on_close: impl FnOnce()) {
        if self.is_empty() {
            return;
        }

        on_confirm(self.selected.clone());
        self.clear();
        on_close();
    }

    pub fn dismiss(&mut self, on_close: impl FnOnce()) {
        self.clear();
        on_close();
    }
}

// same category as the current item, minus the current item itself
pub fn candidates<'a>(items: &'a [PortfolioItem], current: &PortfolioItem) -> Vec<&'a PortfolioItem> {
    items
        .iter()
        .filter(|item| item.id != current.id && item.shares_category_with(current))
        .collect()
}

// the modal only renders while open and while there is an item to match against
fn visible_subject(current: Option<&PortfolioItem>, is_open: bool) -> Option<&PortfolioItem> {
    current.filter(|_| is_open)
}

#[derive(Clone, PartialEq, Props)]
pub struct StyleSelectionModalProps {
    is_open: bool,
    portfolio_items: Vec<PortfolioItem>,
    // always passed, even when there is nothing to customize
    #[props(!optional)]
    current_product: Option<PortfolioItem>,
    on_confirm: EventHandler<Vec<PortfolioItemId>>,
    on_close: EventHandler<()>,
    #[props(default = DEFAULT_MAX_SELECTION)]
    max_selection: usize,
}

#[component]
pub fn StyleSelectionModal(props: StyleSelectionModalProps) -> Element {
    let is_open = props.is_open;
    let max_selection = props.max_selection;
    let on_confirm = props.on_confirm;
    let on_close = props.on_close;

    let mut selection = use_signal(|| StyleSelection::new(max_selection));

    // every open and every close starts over
    use_effect(use_reactive((&is_open, &max_selection), move |(open, max)| {
        selection.write().sync(open, max);
    }));

    let mut close = move || selection.write().dismiss(|| on_close.call(()));

    let Some(current) = visible_subject(props.current_product.as_ref(), is_open) else {
        return rsx! {};
    };

    let options = candidates(&props.portfolio_items, current);
    let count = selection.read().len();

    let footer = rsx! {
        span { class: "selection-count", "{count} of {max_selection} selected" }
        button {
            class: "btn btn-link",
            disabled: count == 0,
            onclick: move |_| selection.write().clear(),
            "Clear all"
        }
        button { class: "btn btn-secondary", onclick: move |_| close(), "Cancel" }
        button {
            class: "btn btn-primary",
            disabled: count == 0,
            onclick: move |_| {
                selection.write().confirm(|chosen| on_confirm.call(chosen), || on_close.call(()));
            },
            "Request these styles"
        }
    };

    rsx! {
        ModernModal {
            title: format!("Choose styles like \"{}\"", current.title),
            size: ModalSize::Large,
            on_close: move |_| close(),
            footer,

            p { class: "form-footer",
                "Pick up to {max_selection} {current.category} samples you'd like your design to draw from."
            }

            if options.is_empty() {
                div { class: "empty-state", "No other {current.category} samples yet." }
            } else {
                div { class: "style-grid",
                    for (index , item) in options.into_iter().enumerate() {
                        StyleOption {
                            key: "{item.id}",
                            item: item.clone(),
                            index,
                            selected: selection.read().is_selected(&item.id),
                            enabled: selection.read().can_toggle(&item.id),
                            on_toggle: move |id: PortfolioItemId| {
                                selection.write().toggle(&id);
                            },
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct StyleOptionProps {
    item: PortfolioItem,
    index: usize,
    selected: bool,
    enabled: bool,
    on_toggle: EventHandler<PortfolioItemId>,
}

#[component]
fn StyleOption(props: StyleOptionProps) -> Element {
    let quality = use_image_quality();
    let id = props.item.id.clone();
    let on_toggle = props.on_toggle;
    let src = sized_image_url(&item_image_at(&props.item, props.index), ImageSize::Thumbnail, quality);

    rsx! {
        button {
            class: if props.selected { "style-option selected press-on-tap" } else { "style-option press-on-tap" },
            style: FADE_UP.staggered(props.index, CARD_STAGGER_MS / 2).style(),
            disabled: !props.enabled,
            aria_pressed: props.selected,
            onclick: move |_| on_toggle.call(id.clone()),
            img { src, alt: "{props.item.title}", loading: "lazy" }
            span { "{props.item.title}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn item(id: &str, category: &str) -> PortfolioItem {
        PortfolioItem {
            id: id.into(),
            title: format!("Sample {id}"),
            designer: "Sarah Chen".into(),
            category: category.into(),
            image_url: String::new(),
            is_liked: None,
            description: None,
            price: None,
            tags: None,
            features: None,
        }
    }

    fn catalog() -> Vec<PortfolioItem> {
        vec![
            item("id1", "Logo Design"),
            item("id2", "Logo Design"),
            item("id3", "Logo Design"),
            item("id4", "Logo Design"),
            item("id5", "Web Design"),
        ]
    }

    #[test]
    fn candidates_share_category_and_exclude_current() {
        let items = catalog();

        let ids: Vec<_> = candidates(&items, &items[0])
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, ["id2", "id3", "id4"]);

        assert!(candidates(&items, &items[4]).is_empty());
    }

    #[test]
    fn cap_blocks_new_picks_but_not_removals() {
        let mut selection = StyleSelection::new(2);

        assert!(selection.toggle("a"));
        assert!(selection.toggle("b"));
        assert!(!selection.toggle("c"));
        assert_eq!(selection.ids(), ["a", "b"]);
        assert!(!selection.can_toggle("c"));
        assert!(selection.can_toggle("a"));

        assert!(selection.toggle("a"));
        assert_eq!(selection.ids(), ["b"]);
        assert!(selection.toggle("c"));
        assert_eq!(selection.ids(), ["b", "c"]);
    }

    #[test]
    fn clear_all_is_unconditional() {
        let mut selection = StyleSelection::new(3);
        selection.toggle("a");
        selection.toggle("b");

        selection.clear();

        assert!(selection.is_empty());
    }

    #[test]
    fn confirm_reports_in_pick_order_then_closes() {
        let items = catalog();
        let mut selection = StyleSelection::new(DEFAULT_MAX_SELECTION);

        for candidate in candidates(&items, &items[0]) {
            assert!(selection.toggle(&candidate.id));
        }
        assert!(selection.is_full());
        assert!(!selection.toggle("id5"));
        assert_eq!(selection.len(), 3);

        let events = RefCell::new(Vec::new());
        selection.confirm(
            |chosen| events.borrow_mut().push(format!("confirm {}", chosen.join(","))),
            || events.borrow_mut().push("close".into()),
        );

        assert_eq!(*events.borrow(), ["confirm id2,id3,id4", "close"]);
        assert!(selection.is_empty());
    }

    #[test]
    fn confirm_with_nothing_picked_does_nothing() {
        let mut selection = StyleSelection::new(3);
        let events = RefCell::new(Vec::<String>::new());

        selection.confirm(
            |_| events.borrow_mut().push("confirm".into()),
            || events.borrow_mut().push("close".into()),
        );

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn dismiss_clears_without_confirming() {
        let mut selection = StyleSelection::new(3);
        selection.toggle("id2");

        let mut closed = false;
        selection.dismiss(|| closed = true);

        assert!(closed);
        assert!(selection.is_empty());
    }

    #[test]
    fn nothing_to_show_without_a_product_or_while_closed() {
        let current = item("id1", "Logo Design");

        assert!(visible_subject(None, true).is_none());
        assert!(visible_subject(Some(&current), false).is_none());
        assert_eq!(visible_subject(Some(&current), true), Some(&current));
    }

    #[test]
    fn reopening_starts_over() {
        let mut selection = StyleSelection::new(3);
        assert!(selection.sync(true, 3));

        selection.toggle("id2");
        selection.toggle("id3");

        // a re-render with the same flags keeps the picks
        assert!(!selection.sync(true, 3));
        assert_eq!(selection.ids(), ["id2", "id3"]);

        // closed by the parent directly, then reopened
        assert!(selection.sync(false, 3));
        assert!(selection.is_empty());
        selection.toggle("id4");
        assert!(selection.sync(true, 3));
        assert!(selection.is_empty());

        // a new cap applies straight away
        selection.toggle("id2");
        assert!(selection.sync(true, 1));
        assert!(selection.is_empty());
        selection.toggle("id2");
        assert!(!selection.can_toggle("id3"));
    }

    #[test]
    fn zero_cap_accepts_nothing() {
        let mut selection = StyleSelection::new(0);
        assert!(!selection.toggle("a"));
        assert!(selection.is_empty());
    }
}
