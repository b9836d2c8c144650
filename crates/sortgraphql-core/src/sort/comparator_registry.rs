use crate::SortError;
use crate::sort::SortConfig;
use indexmap::IndexMap;

type Result<T> = std::result::Result<T, SortError>;

/// The kind of element whose children are being ordered.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ParentKind {
    /// A directive definition, or a directive applied to an element.
    Directive,
    Enum,
    EnumValue,
    FieldDefinition,
    InputField,
    InputObject,
    Interface,
    Object,
    Parameter,
    Scalar,
    Schema,
    Union,
}

/// The kind of child element being ordered under a [`ParentKind`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ChildKind {
    Argument,
    DirectiveAnnotation,
    DirectiveDefinition,
    EnumValue,
    Field,
    ImplementedInterface,
    InputField,
    Type,
    UnionMember,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ElementOrder {
    /// Ascending by name, comparing Unicode code points (case-sensitive).
    #[default]
    ByName,

    /// The order in which the elements were declared.
    DeclarationOrder,
}

/// Maps each `(parent kind, child kind)` pair that has orderable children
/// to the order those children are printed in.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparatorRegistry {
    orders: IndexMap<(ParentKind, ChildKind), ElementOrder>,
}
impl ComparatorRegistry {
    const ORDERABLE_PAIRS: [(ParentKind, ChildKind); 22] = [
        (ParentKind::Directive, ChildKind::Argument),
        (ParentKind::Enum, ChildKind::DirectiveAnnotation),
        (ParentKind::Enum, ChildKind::EnumValue),
        (ParentKind::EnumValue, ChildKind::DirectiveAnnotation),
        (ParentKind::FieldDefinition, ChildKind::Argument),
        (ParentKind::FieldDefinition, ChildKind::DirectiveAnnotation),
        (ParentKind::InputField, ChildKind::DirectiveAnnotation),
        (ParentKind::InputObject, ChildKind::DirectiveAnnotation),
        (ParentKind::InputObject, ChildKind::InputField),
        (ParentKind::Interface, ChildKind::DirectiveAnnotation),
        (ParentKind::Interface, ChildKind::Field),
        (ParentKind::Interface, ChildKind::ImplementedInterface),
        (ParentKind::Object, ChildKind::DirectiveAnnotation),
        (ParentKind::Object, ChildKind::Field),
        (ParentKind::Object, ChildKind::ImplementedInterface),
        (ParentKind::Parameter, ChildKind::DirectiveAnnotation),
        (ParentKind::Scalar, ChildKind::DirectiveAnnotation),
        (ParentKind::Schema, ChildKind::DirectiveAnnotation),
        (ParentKind::Schema, ChildKind::DirectiveDefinition),
        (ParentKind::Schema, ChildKind::Type),
        (ParentKind::Union, ChildKind::DirectiveAnnotation),
        (ParentKind::Union, ChildKind::UnionMember),
    ];

    /// The default registry with the overrides `config` asks for.
    pub fn from_config(config: &SortConfig) -> Self {
        let mut registry = Self::default();
        if config.skip_union_type_sorting() {
            registry.orders.insert(
                (ParentKind::Union, ChildKind::UnionMember),
                ElementOrder::DeclarationOrder,
            );
        }
        if config.skip_field_argument_sorting() {
            registry.orders.insert(
                (ParentKind::FieldDefinition, ChildKind::Argument),
                ElementOrder::DeclarationOrder,
            );
        }
        registry
    }

    pub fn order_for(
        &self,
        parent: ParentKind,
        child: ChildKind,
    ) -> Option<ElementOrder> {
        self.orders.get(&(parent, child)).copied()
    }

    /// Overrides the order of one `(parent, child)` pair. Pairs that never
    /// have orderable children are rejected.
    pub fn set_order(
        &mut self,
        parent: ParentKind,
        child: ChildKind,
        order: ElementOrder,
    ) -> Result<()> {
        match self.orders.get_mut(&(parent, child)) {
            Some(existing_order) => {
                *existing_order = order;
                Ok(())
            },
            None => Err(SortError::configuration(
                "comparator",
                format!("{parent:?} elements have no orderable {child:?} children"),
            )),
        }
    }

    /// Orders `elements` in place. The sort is stable, so elements that
    /// compare equal (and every element of a pair using
    /// [`ElementOrder::DeclarationOrder`]) keep their declaration order.
    pub fn sort<T, F>(
        &self,
        parent: ParentKind,
        child: ChildKind,
        elements: &mut [T],
        name_of: F,
    ) where F: Fn(&T) -> &str {
        match self.order_for(parent, child).unwrap_or(ElementOrder::DeclarationOrder) {
            ElementOrder::ByName =>
                elements.sort_by(|a, b| name_of(a).cmp(name_of(b))),
            ElementOrder::DeclarationOrder => (),
        }
    }
}
impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self {
            orders: Self::ORDERABLE_PAIRS.into_iter()
                .map(|pair| (pair, ElementOrder::ByName))
                .collect(),
        }
    }
}
