use crate::angle::AngleMode;
use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// Grouping used by calculator front-ends to lay out their keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Arithmetic,
    Trigonometric,
    InverseTrigonometric,
    Hyperbolic,
    InverseHyperbolic,
    Logarithmic,
    Factorial,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Arithmetic => "arithmetic",
            Category::Trigonometric => "trigonometric",
            Category::InverseTrigonometric => "inverse trigonometric",
            Category::Hyperbolic => "hyperbolic",
            Category::InverseHyperbolic => "inverse hyperbolic",
            Category::Logarithmic => "logarithmic",
            Category::Factorial => "factorial",
        };
        f.write_str(label)
    }
}

/// Definition of a catalog function: its names, call shape and evaluator
#[derive(Clone)]
pub struct FunctionDefinition {
    /// Canonical name of the function (e.g., "divide", "sine")
    pub name: &'static str,

    /// Calculator key labels and short names that resolve to this function
    pub aliases: &'static [&'static str],

    /// Exact number of scalar operands
    pub arity: usize,

    pub category: Category,

    /// Whether the angle mode changes the result
    pub uses_angle_mode: bool,

    /// Numerical evaluation; `args.len() == arity` is checked by the caller
    pub eval: fn(&[f64], AngleMode) -> f64,
}

impl FunctionDefinition {
    /// Helper to check if argument count is valid
    pub fn validate_arity(&self, args: usize) -> bool {
        self.arity == args
    }
}

impl fmt::Debug for FunctionDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDefinition")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("arity", &self.arity)
            .field("category", &self.category)
            .field("uses_angle_mode", &self.uses_angle_mode)
            .finish_non_exhaustive()
    }
}

struct Tables {
    /// Definitions in catalog order
    ordered: Vec<FunctionDefinition>,
    /// Canonical names and aliases, both mapped to an index into `ordered`
    by_name: FxHashMap<&'static str, usize>,
}

/// Static registry storing all function definitions
static REGISTRY: OnceLock<Tables> = OnceLock::new();

/// Initialize the registry with all function definitions
fn init_registry() -> Tables {
    let ordered = crate::functions::definitions::all_definitions();
    let mut by_name = FxHashMap::default();
    by_name.reserve(ordered.len() * 2);

    for (idx, def) in ordered.iter().enumerate() {
        by_name.insert(def.name, idx);
        for alias in def.aliases {
            by_name.insert(*alias, idx);
        }
    }

    Tables { ordered, by_name }
}

/// Central registry for getting function definitions
pub struct Registry;

impl Registry {
    /// Get a function definition by canonical name or alias - O(1) lookup
    pub fn get(name: &str) -> Option<&'static FunctionDefinition> {
        let tables = REGISTRY.get_or_init(init_registry);
        tables.by_name.get(name).map(|&idx| &tables.ordered[idx])
    }

    /// All definitions in catalog order
    pub fn all() -> &'static [FunctionDefinition] {
        &REGISTRY.get_or_init(init_registry).ordered
    }

    /// Definitions belonging to one category, in catalog order
    pub fn by_category(category: Category) -> impl Iterator<Item = &'static FunctionDefinition> {
        Self::all().iter().filter(move |def| def.category == category)
    }
}
