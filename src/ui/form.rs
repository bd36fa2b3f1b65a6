//! The five-field product form shared by the add and edit screens.
//!
//! Pure data plus pure transitions; rendering lives with the screens that
//! use it.

use crate::catalog::product::{Price, Product, ProductDraft};

/// Identifies one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Title,
    Description,
    Category,
    Price,
    Image,
}

/// One editable text field.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub id: FieldId,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

impl FormField {
    fn empty(id: FieldId, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            id,
            label,
            placeholder,
            value: String::new(),
        }
    }
}

/// Editing transitions. Submission is not one of them: whether a submit
/// goes out is the caller's decision, made around the dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum FormIntent {
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
}

/// The form itself: five fields, one focused.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub fields: Vec<FormField>,
    pub focused: usize,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self::empty()
    }
}

impl ProductForm {
    pub fn empty() -> Self {
        Self {
            fields: vec![
                FormField::empty(FieldId::Title, "Title", "Enter a title..."),
                FormField::empty(FieldId::Description, "Description", "Enter a description..."),
                FormField::empty(FieldId::Category, "Category", "Enter a category..."),
                FormField::empty(FieldId::Price, "Price", "Enter a price..."),
                FormField::empty(FieldId::Image, "Image", "Enter an image URL..."),
            ],
            focused: 0,
        }
    }

    /// Prefill from an existing product, for the edit screen.
    pub fn from_product(product: &Product) -> Self {
        let mut form = Self::empty();
        for field in &mut form.fields {
            field.value = match field.id {
                FieldId::Title => product.title.clone(),
                FieldId::Description => product.description.clone(),
                FieldId::Category => product.category.clone(),
                FieldId::Price => product.price.as_entry(),
                FieldId::Image => product.image.clone(),
            };
        }
        form
    }

    pub fn apply(mut self, intent: FormIntent) -> Self {
        match intent {
            FormIntent::Insert(c) => {
                self.fields[self.focused].value.push(c);
            }
            FormIntent::Backspace => {
                self.fields[self.focused].value.pop();
            }
            FormIntent::FocusNext => {
                self.focused = (self.focused + 1) % self.fields.len();
            }
            FormIntent::FocusPrev => {
                self.focused = if self.focused == 0 {
                    self.fields.len() - 1
                } else {
                    self.focused - 1
                };
            }
        }
        self
    }

    /// The first field with no value, if any. Every field is required;
    /// submission is refused while this returns `Some`.
    pub fn first_empty(&self) -> Option<&FormField> {
        self.fields.iter().find(|field| field.value.is_empty())
    }

    /// Build the mutation payload. Values go out as the text the user
    /// entered; no coercion happens here.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            title: self.value_of(FieldId::Title).to_string(),
            description: self.value_of(FieldId::Description).to_string(),
            category: self.value_of(FieldId::Category).to_string(),
            price: Price::Text(self.value_of(FieldId::Price).to_string()),
            image: self.value_of(FieldId::Image).to_string(),
        }
    }

    fn value_of(&self, id: FieldId) -> &str {
        self.fields
            .iter()
            .find(|field| field.id == id)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }
}
