//! Mock DOM for the widget hosts
//!
//! A flat id registry over a tree of [`DomElement`]s. Hosts rebuild parts of
//! the tree on every render and tests read the result back by id, so the
//! widgets are fully exercised without a browser.

use std::collections::HashMap;

/// Class toggled on overlays and popups while they are shown
pub const ACTIVE_CLASS: &str = "active";

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Form value of an input or textarea
    #[must_use]
    pub fn value(&self) -> &str {
        self.get_attr("value").unwrap_or_default()
    }

    /// Sets the form value
    pub fn set_value(&mut self, value: &str) {
        self.attributes.insert("value".to_string(), value.to_string());
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Adds or removes a class
    pub fn toggle_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    fn collect_ids(&self, out: &mut Vec<String>) {
        for child in &self.children {
            if !child.id.is_empty() {
                out.push(child.id.clone());
            }
            child.collect_ids(out);
        }
    }
}

/// Events a host can receive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// New value typed into an input or textarea
    Input {
        /// The ID of the input element
        element_id: String,
        /// The new value
        value: String,
    },
    /// Key pressed anywhere on the page
    KeyPress {
        /// Browser key name (`Enter`, `Escape`, `s`, ...)
        key: String,
        /// Whether Ctrl was held
        ctrl: bool,
        /// Whether Meta (Cmd) was held
        meta: bool,
    },
    /// Element gained focus
    Focus {
        /// The ID of the focused element
        element_id: String,
    },
    /// Element lost focus
    Blur {
        /// The ID of the element that lost focus
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// Creates a key press without modifiers
    #[must_use]
    pub fn key_press(key: &str) -> Self {
        Self::key_press_with_modifiers(key, false, false)
    }

    /// Creates a key press with modifiers
    #[must_use]
    pub fn key_press_with_modifiers(key: &str, ctrl: bool, meta: bool) -> Self {
        Self::KeyPress {
            key: key.to_string(),
            ctrl,
            meta,
        }
    }

    /// Creates a focus event
    #[must_use]
    pub fn focus(element_id: &str) -> Self {
        Self::Focus {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a blur event
    #[must_use]
    pub fn blur(element_id: &str) -> Self {
        Self::Blur {
            element_id: element_id.to_string(),
        }
    }

    /// Returns true for Ctrl+S or Cmd+S
    #[must_use]
    pub fn is_save_shortcut(&self) -> bool {
        matches!(self, Self::KeyPress { key, ctrl, meta } if (*ctrl || *meta) && key.eq_ignore_ascii_case("s"))
    }
}

/// Mock DOM: element tree plus id lookup, focus and event history
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    elements: HashMap<String, DomElement>,
    event_history: Vec<DomEvent>,
    focused_element: Option<String>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty mock DOM
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
            focused_element: None,
        }
    }

    /// Creates a DOM from a page tree, registering every element with an id
    #[must_use]
    pub fn from_root(root: DomElement) -> Self {
        let mut dom = Self::new();
        dom.register_element(root.clone());
        dom.root = root;
        dom
    }

    /// Registers an element and its descendants for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        for child in &element.children {
            self.register_element(child.clone());
        }
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event and applies its default effect (focus, typed value)
    pub fn dispatch_event(&mut self, event: DomEvent) {
        match &event {
            DomEvent::Focus { element_id } => {
                self.focused_element = Some(element_id.clone());
            }
            DomEvent::Blur { .. } => {
                self.focused_element = None;
            }
            DomEvent::Input { element_id, value } => {
                self.set_element_value(element_id, value);
            }
            DomEvent::Click { .. } | DomEvent::KeyPress { .. } => {}
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Gets the currently focused element ID
    #[must_use]
    pub fn focused_element(&self) -> Option<&str> {
        self.focused_element.as_deref()
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Updates an input's value by ID
    pub fn set_element_value(&mut self, id: &str, value: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_value(value);
        }
    }

    /// Gets an input's value by ID
    #[must_use]
    pub fn element_value(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(DomElement::value)
    }

    /// Shows or hides an overlay by toggling [`ACTIVE_CLASS`]
    pub fn set_active(&mut self, id: &str, active: bool) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.toggle_class(ACTIVE_CLASS, active);
        }
    }

    /// Returns true when the element carries [`ACTIVE_CLASS`]
    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|e| e.has_class(ACTIVE_CLASS))
    }

    /// Appends a child element to a parent
    pub fn append_child(&mut self, parent_id: &str, child: DomElement) {
        if let Some(parent) = self.elements.get_mut(parent_id) {
            parent.children.push(child.clone());
        }
        self.register_element(child);
    }

    /// Removes every child of an element, unregistering the whole subtree
    pub fn clear_children(&mut self, id: &str) {
        let Some(elem) = self.elements.get_mut(id) else {
            return;
        };
        let removed = std::mem::take(&mut elem.children);

        let mut ids = Vec::new();
        for child in &removed {
            if !child.id.is_empty() {
                ids.push(child.id.clone());
            }
            child.collect_ids(&mut ids);
        }
        for child_id in ids {
            self.elements.remove(&child_id);
        }
    }

    /// Text of each child of an element, in order
    #[must_use]
    pub fn children_text(&self, id: &str) -> Vec<String> {
        self.elements
            .get(id)
            .map(|e| e.children.iter().map(|c| c.text_content.clone()).collect())
            .unwrap_or_default()
    }
}
