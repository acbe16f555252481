//! # Equation Registry
//!
//! Central registry of the IEEE Std 80 equations implemented by this crate.
//! Each equation carries its code reference, plain-text formula and variable
//! definitions so that results can be audited against the standard.
//!
//! ## Usage
//!
//! ```rust
//! use grounding_core::equations::registry::Equation;
//!
//! let meta = Equation::GridResistance.metadata();
//! println!("{}: {}", meta.reference.citation(), meta.formula_plain);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to the source of an equation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// IEEE Std 80 - Guide for Safety in AC Substation Grounding
    Ieee80 {
        year: u16,
        page: u16,
        equation: &'static str,
    },
    /// IEEE Std 80 clause without a numbered equation
    Ieee80Clause { year: u16, clause: &'static str },
    /// Plane geometry / circuit fundamentals (no code reference needed)
    Fundamental,
}

impl CodeReference {
    const fn ieee80(page: u16, equation: &'static str) -> Self {
        CodeReference::Ieee80 {
            year: 2013,
            page,
            equation,
        }
    }

    /// Format the reference for display
    pub fn citation(&self) -> String {
        match self {
            CodeReference::Ieee80 { year, page, equation } => {
                format!("IEEE Std 80-{} p. {}, {}", year, page, equation)
            }
            CodeReference::Ieee80Clause { year, clause } => {
                format!("IEEE Std 80-{} Clause {}", year, clause)
            }
            CodeReference::Fundamental => "Fundamental".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::Ieee80 { .. } | CodeReference::Ieee80Clause { .. } => "IEEE 80",
            CodeReference::Fundamental => "Fundamental",
        }
    }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Soil model and surface layer
    SoilModel,
    /// Tolerable step and touch limits
    TolerableLimits,
    /// Conductor cross-section and diameter
    ConductorSizing,
    /// Grid resistance, sizing search and GPR
    GridResistance,
    /// Km, Ki, Ks
    MeshFactors,
    /// Mesh touch and step voltages
    MeshVoltages,
}

impl EquationCategory {
    /// All categories
    pub const ALL: [EquationCategory; 6] = [
        EquationCategory::SoilModel,
        EquationCategory::TolerableLimits,
        EquationCategory::ConductorSizing,
        EquationCategory::GridResistance,
        EquationCategory::MeshFactors,
        EquationCategory::MeshVoltages,
    ];

    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::SoilModel => "Soil Model",
            EquationCategory::TolerableLimits => "Tolerable Limits",
            EquationCategory::ConductorSizing => "Conductor Sizing",
            EquationCategory::GridResistance => "Grid Resistance",
            EquationCategory::MeshFactors => "Mesh Factors",
            EquationCategory::MeshVoltages => "Mesh Voltages",
        }
    }

    /// Sort order in the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::SoilModel => 1,
            EquationCategory::TolerableLimits => 2,
            EquationCategory::ConductorSizing => 3,
            EquationCategory::GridResistance => 4,
            EquationCategory::MeshFactors => 5,
            EquationCategory::MeshVoltages => 6,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Rg", "h", "Km")
    pub symbol: &'static str,
    pub description: &'static str,
    /// Units (e.g., "ohm", "m", "-")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for an equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Grid Resistance")
    pub name: &'static str,
    pub description: &'static str,
    /// The formula in plain text
    pub formula_plain: &'static str,
    pub reference: CodeReference,
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All equations used by the grounding calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    /// α, β, ρa two-layer decomposition
    ApparentResistivity,
    /// Cs (Eq. 27)
    SurfaceDeratingFactor,
    /// Estep50 (Eq. 29)
    TolerableStep50kg,
    /// Etouch50 (Eq. 32)
    TolerableTouch50kg,
    /// Amm² (Eq. 37)
    ConductorSection,
    /// d = 2√(A/π)
    ConductorDiameter,
    /// Rg (Eq. 57)
    GridResistance,
    /// Minimum square grid meeting the resistance target
    GridSizingSearch,
    /// Lt = grid length + rods
    TotalConductorLength,
    /// GPR = IG·Rg
    GroundPotentialRise,
    /// Km (Eq. 86)
    GeometricSpacingFactor,
    /// Ki (Eq. 94)
    IrregularityFactor,
    /// Ks (Eq. 99)
    StepSpacingFactor,
    /// Em (Eq. 85)
    MeshTouchVoltage,
    /// Es (Eq. 97)
    MeshStepVoltage,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            Equation::ApparentResistivity => EquationMetadata {
                name: "Apparent Resistivity",
                description: "Two-layer soil decomposition used to choose an apparent uniform resistivity",
                formula_plain: "alpha = sqrt(A/pi)/d1, beta = rho2/rho1, rho_a = N*rho1",
                reference: CodeReference::Ieee80Clause { year: 2013, clause: "13.4" },
                variables: vec![
                    Variable::new("A", "Grid area", "m^2"),
                    Variable::new("d1", "Equivalent mesh diameter reference", "m"),
                    Variable::new("rho1", "Upper layer resistivity", "ohm-m"),
                    Variable::new("rho2", "Lower layer resistivity", "ohm-m"),
                    Variable::new("N", "Layering coefficient", "-"),
                ],
                assumptions: vec!["Two-layer soil", "N read from the two-layer curves"],
                category: EquationCategory::SoilModel,
                source_module: "equations/ieee80.rs",
                source_function: "apparent_resistivity",
            },

            Equation::SurfaceDeratingFactor => EquationMetadata {
                name: "Surface Layer Derating Factor",
                description: "Derating of the surface material resistivity for a finite surface layer",
                formula_plain: "Cs = 1 - 0.09*(1 - rho2/rho1)/(2*h + 0.09)",
                reference: CodeReference::ieee80(23, "Eq. 27"),
                variables: vec![
                    Variable::new("Cs", "Surface layer derating factor", "-"),
                    Variable::new("h", "Grid burial depth", "m"),
                ],
                assumptions: vec!["Grid burial depth stands in for the surface layer thickness"],
                category: EquationCategory::SoilModel,
                source_module: "equations/ieee80.rs",
                source_function: "surface_derating_factor",
            },

            Equation::TolerableStep50kg => EquationMetadata {
                name: "Tolerable Step Voltage (50 kg)",
                description: "Maximum step voltage a 50 kg person can withstand for the fault duration",
                formula_plain: "Estep50 = (1000 + 6*Cs*rho_s) * 0.116/sqrt(ts)",
                reference: CodeReference::ieee80(28, "Eq. 29"),
                variables: vec![
                    Variable::new("Estep50", "Tolerable step voltage", "V"),
                    Variable::new("rho_s", "Surface material resistivity", "ohm-m"),
                    Variable::new("ts", "Shock duration", "s"),
                ],
                assumptions: vec!["50 kg body weight", "Body resistance 1000 ohm"],
                category: EquationCategory::TolerableLimits,
                source_module: "equations/ieee80.rs",
                source_function: "step_voltage_50kg",
            },

            Equation::TolerableTouch50kg => EquationMetadata {
                name: "Tolerable Touch Voltage (50 kg)",
                description: "Maximum touch voltage a 50 kg person can withstand for the fault duration",
                formula_plain: "Etouch50 = (1000 + 1.5*Cs*rho_s) * 0.116/sqrt(ts)",
                reference: CodeReference::ieee80(29, "Eq. 32"),
                variables: vec![
                    Variable::new("Etouch50", "Tolerable touch voltage", "V"),
                    Variable::new("rho_s", "Surface material resistivity", "ohm-m"),
                    Variable::new("ts", "Shock duration", "s"),
                ],
                assumptions: vec!["50 kg body weight", "Body resistance 1000 ohm"],
                category: EquationCategory::TolerableLimits,
                source_module: "equations/ieee80.rs",
                source_function: "touch_voltage_50kg",
            },

            Equation::ConductorSection => EquationMetadata {
                name: "Conductor Cross-Section",
                description: "Minimum conductor section that survives the fault current without fusing",
                formula_plain: "A = I * 197.4/sqrt(TCAP/(tc*ar*pr) * ln((K0 + Tm)/(K0 + Ta))) * 0.000506707",
                reference: CodeReference::ieee80(42, "Eq. 37"),
                variables: vec![
                    Variable::new("A", "Conductor section", "mm^2"),
                    Variable::new("I", "Grid current", "A"),
                    Variable::new("TCAP", "Thermal capacity per unit volume", "J/(cm^3 C)"),
                    Variable::new("ar", "Thermal coefficient of resistivity", "1/C"),
                    Variable::new("pr", "Conductor resistivity at reference temperature", "uohm-cm"),
                    Variable::new("K0", "1/a0", "C"),
                    Variable::new("Tm", "Maximum allowable temperature", "C"),
                    Variable::new("Ta", "Ambient temperature", "C"),
                ],
                assumptions: vec!["Adiabatic heating", "Tm > Ta"],
                category: EquationCategory::ConductorSizing,
                source_module: "equations/ieee80.rs",
                source_function: "conductor_section_mm2",
            },

            Equation::ConductorDiameter => EquationMetadata {
                name: "Conductor Diameter",
                description: "Diameter of a solid round conductor with the computed section",
                formula_plain: "d = 2*sqrt(A/pi) * 0.001",
                reference: CodeReference::Fundamental,
                variables: vec![
                    Variable::new("d", "Conductor diameter", "m"),
                    Variable::new("A", "Conductor section", "mm^2"),
                ],
                assumptions: vec!["Solid round conductor"],
                category: EquationCategory::ConductorSizing,
                source_module: "equations/ieee80.rs",
                source_function: "conductor_diameter_m",
            },

            Equation::GridResistance => EquationMetadata {
                name: "Grid Resistance",
                description: "Resistance of a grid to remote earth (Sverak)",
                formula_plain: "Rg = rho2*(1/L + 1/sqrt(20*A)*(1 + 1/(1 + h*sqrt(20/A))))",
                reference: CodeReference::ieee80(67, "Eq. 57"),
                variables: vec![
                    Variable::new("Rg", "Grid resistance", "ohm"),
                    Variable::new("L", "Grid length", "m"),
                    Variable::new("A", "Grid area", "m^2"),
                    Variable::new("h", "Grid burial depth", "m"),
                ],
                assumptions: vec![
                    "Both area terms floored at 0.001",
                    "L floored at 1.0 m",
                ],
                category: EquationCategory::GridResistance,
                source_module: "equations/ieee80.rs",
                source_function: "grid_resistance",
            },

            Equation::GridSizingSearch => EquationMetadata {
                name: "Grid Sizing Search",
                description: "Smallest square grid, in 1 m steps, whose resistance meets the target",
                formula_plain: "min L in {1, 2, ...} such that Rg(L x L) <= Rtarget, L <= 1000000",
                reference: CodeReference::ieee80(92, "Figure 32"),
                variables: vec![
                    Variable::new("L", "Square grid side", "m"),
                    Variable::new("Rtarget", "Target grid resistance", "ohm"),
                ],
                assumptions: vec!["Square grid", "Fails when L exceeds 1000000 m"],
                category: EquationCategory::GridResistance,
                source_module: "calculations/resistance.rs",
                source_function: "mesh_calc",
            },

            Equation::TotalConductorLength => EquationMetadata {
                name: "Total Conductor Length",
                description: "Sized grid length plus the equivalent length credited for ground rods",
                formula_plain: "Lt = L + 3*nR",
                reference: CodeReference::ieee80(92, "Figure 32"),
                variables: vec![
                    Variable::new("Lt", "Total conductor length", "m"),
                    Variable::new("nR", "Number of ground rods", "-"),
                ],
                assumptions: vec!["Each rod counts as 3 m of horizontal conductor"],
                category: EquationCategory::GridResistance,
                source_module: "calculations/mesh.rs",
                source_function: "overall_conductor_length",
            },

            Equation::GroundPotentialRise => EquationMetadata {
                name: "Ground Potential Rise",
                description: "Grid voltage relative to remote earth during the fault",
                formula_plain: "GPR = IG * Rg",
                reference: CodeReference::Fundamental,
                variables: vec![
                    Variable::new("GPR", "Ground potential rise", "V"),
                    Variable::new("IG", "Maximum grid current", "A"),
                    Variable::new("Rg", "Grid resistance at the total conductor length", "ohm"),
                ],
                assumptions: vec!["Rg evaluated with grid length = Lt"],
                category: EquationCategory::GridResistance,
                source_module: "equations/ieee80.rs",
                source_function: "ground_potential_rise",
            },

            Equation::GeometricSpacingFactor => EquationMetadata {
                name: "Geometric Spacing Factor Km",
                description: "Spacing factor for the mesh (touch) voltage",
                formula_plain: "Km = 1/(2pi)*[ln(D^2/(16hd) + (D+2h)^2/(8Dd) - h/(4d)) + Kii/Kh*ln(8/(pi(2n-1)))]",
                reference: CodeReference::ieee80(94, "Eq. 86"),
                variables: vec![
                    Variable::new("D", "Conductor spacing", "m"),
                    Variable::new("d", "Conductor diameter", "m"),
                    Variable::new("n", "Geometric conductor count", "-"),
                    Variable::new("Kii", "(2n)^(-2/n)", "-"),
                    Variable::new("Kh", "sqrt(1 + h/h0), h0 = 1 m", "-"),
                ],
                assumptions: vec!["n = max of conductor runs along width and length", "n >= 1"],
                category: EquationCategory::MeshFactors,
                source_module: "equations/ieee80.rs",
                source_function: "km_factor",
            },

            Equation::IrregularityFactor => EquationMetadata {
                name: "Irregularity Factor Ki",
                description: "Correction for current concentration at the grid periphery",
                formula_plain: "Ki = 0.644 + 0.148*sqrt(nw*nl)",
                reference: CodeReference::ieee80(95, "Eq. 94"),
                variables: vec![
                    Variable::new("nw", "Conductor runs across the width", "-"),
                    Variable::new("nl", "Conductor runs along the length", "-"),
                ],
                assumptions: vec!["Rectangular grid"],
                category: EquationCategory::MeshFactors,
                source_module: "equations/ieee80.rs",
                source_function: "ki_factor",
            },

            Equation::StepSpacingFactor => EquationMetadata {
                name: "Step Spacing Factor Ks",
                description: "Spacing factor for the step voltage",
                formula_plain: "Ks = 1/(2*pi*h) + 1/(D + h) + 1/D * 0.5^(n-2)",
                reference: CodeReference::ieee80(96, "Eq. 99"),
                variables: vec![
                    Variable::new("h", "Grid burial depth", "m"),
                    Variable::new("D", "Conductor spacing", "m"),
                    Variable::new("n", "Geometric conductor count", "-"),
                ],
                assumptions: vec!["Burial depth between 0.25 m and 2.5 m"],
                category: EquationCategory::MeshFactors,
                source_module: "equations/ieee80.rs",
                source_function: "ks_factor",
            },

            Equation::MeshTouchVoltage => EquationMetadata {
                name: "Mesh Touch Voltage",
                description: "Touch voltage at the center of a corner mesh",
                formula_plain: "Em = rho2*IG*Km*Ki/Lt",
                reference: CodeReference::ieee80(94, "Eq. 85"),
                variables: vec![
                    Variable::new("Em", "Mesh voltage", "V"),
                    Variable::new("Lt", "Total conductor length", "m"),
                ],
                assumptions: vec!["Uniform current distribution along Lt"],
                category: EquationCategory::MeshVoltages,
                source_module: "equations/ieee80.rs",
                source_function: "mesh_voltage",
            },

            Equation::MeshStepVoltage => EquationMetadata {
                name: "Mesh Step Voltage",
                description: "Step voltage just outside the grid corner",
                formula_plain: "Es = rho2*IG*Ks*Ki/Lt",
                reference: CodeReference::ieee80(96, "Eq. 97"),
                variables: vec![
                    Variable::new("Es", "Step voltage", "V"),
                    Variable::new("Lt", "Total conductor length", "m"),
                ],
                assumptions: vec!["Uniform current distribution along Lt"],
                category: EquationCategory::MeshVoltages,
                source_module: "equations/ieee80.rs",
                source_function: "mesh_voltage",
            },
        }
    }

    /// Equations belonging to `category`, in registry order
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .copied()
            .filter(|eq| eq.metadata().category == category)
            .collect()
    }

    /// Categories in document order
    pub fn all_categories() -> Vec<EquationCategory> {
        let mut categories = EquationCategory::ALL.to_vec();
        categories.sort_by_key(EquationCategory::sort_order);
        categories
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    Equation::ApparentResistivity,
    Equation::SurfaceDeratingFactor,
    Equation::TolerableStep50kg,
    Equation::TolerableTouch50kg,
    Equation::ConductorSection,
    Equation::ConductorDiameter,
    Equation::GridResistance,
    Equation::GridSizingSearch,
    Equation::TotalConductorLength,
    Equation::GroundPotentialRise,
    Equation::GeometricSpacingFactor,
    Equation::IrregularityFactor,
    Equation::StepSpacingFactor,
    Equation::MeshTouchVoltage,
    Equation::MeshStepVoltage,
];

/// Equations applied by a full grid assessment, in evaluation order.
pub fn assessment_equations() -> Vec<Equation> {
    vec![
        Equation::ApparentResistivity,
        Equation::SurfaceDeratingFactor,
        Equation::TolerableStep50kg,
        Equation::TolerableTouch50kg,
        Equation::ConductorSection,
        Equation::ConductorDiameter,
        Equation::GeometricSpacingFactor,
        Equation::IrregularityFactor,
        Equation::StepSpacingFactor,
        Equation::GridResistance,
        Equation::GridSizingSearch,
        Equation::TotalConductorLength,
        Equation::MeshTouchVoltage,
        Equation::MeshStepVoltage,
        Equation::GroundPotentialRise,
    ]
}

// ============================================================================
// EQUATIONS.md
// ============================================================================

const MARKDOWN_HEADER: &str = r#"# Grounding Grid Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

Every formula used by the grounding grid calculations, grouped by stage,
with its IEEE Std 80-2013 reference and where it is implemented.

Units: lengths in m, conductor section in mm^2, resistivity in ohm-m,
resistance in ohm, current in A, time in s, temperature in C.

"#;

/// One `###` section: name, description, formula, variable table, notes.
fn equation_section(equation: Equation) -> String {
    let meta = equation.metadata();

    let mut lines = vec![
        format!("### {}", meta.name),
        String::new(),
        meta.description.to_string(),
        String::new(),
        format!("```text\n{}\n```", meta.formula_plain),
        String::new(),
        "| Symbol | Meaning | Units |".to_string(),
        "|--------|---------|-------|".to_string(),
    ];
    lines.extend(
        meta.variables
            .iter()
            .map(|var| format!("| {} | {} | {} |", var.symbol, var.description, var.units)),
    );
    lines.push(String::new());

    lines.push(format!("- Reference: {}", meta.reference.citation()));
    lines.push(format!(
        "- Implemented in: `{}` (`{}`)",
        meta.source_module, meta.source_function
    ));
    lines.extend(meta.assumptions.iter().map(|a| format!("- Assumes: {}", a)));
    lines.push(String::new());

    lines.join("\n") + "\n"
}

/// Render the equation registry as the EQUATIONS.md document.
///
/// # Example
///
/// ```rust
/// use grounding_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("Grounding Grid Equations Reference"));
/// assert!(markdown.contains("Grid Resistance"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(16_000);
    output.push_str(MARKDOWN_HEADER);

    let categories = Equation::all_categories();
    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));
        for equation in equations {
            output.push_str(&equation_section(equation));
        }
    }

    output.push_str(&format!(
        "---\n\n{} equations in {} categories.\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equations_have_metadata() {
        assert_eq!(ALL_EQUATIONS.len(), 15);

        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(!meta.name.is_empty(), "Equation {:?} has no name", eq);
            assert!(!meta.formula_plain.is_empty(), "Equation {:?} has no formula", eq);
            assert!(!meta.variables.is_empty(), "Equation {:?} has no variables", eq);
            assert!(!meta.source_function.is_empty(), "Equation {:?} missing source_function", eq);
        }

        let rg = Equation::GridResistance.metadata();
        assert!(rg.formula_plain.contains("sqrt(20*A)"));
    }

    #[test]
    fn test_code_reference_citation() {
        let eq57 = Equation::GridResistance.metadata().reference;
        assert_eq!(eq57.citation(), "IEEE Std 80-2013 p. 67, Eq. 57");
        assert_eq!(eq57.short_form(), "IEEE 80");
        assert_eq!(CodeReference::Fundamental.citation(), "Fundamental");
    }

    #[test]
    fn test_categories_sorted() {
        let cats = Equation::all_categories();
        let orders: Vec<u8> = cats.iter().map(|c| c.sort_order()).collect();
        let mut sorted = orders.clone();
        sorted.sort();
        assert_eq!(orders, sorted);
    }

    #[test]
    fn test_every_category_used() {
        for cat in Equation::all_categories() {
            assert!(!Equation::in_category(cat).is_empty(), "{:?} is empty", cat);
        }
    }

    #[test]
    fn test_assessment_equations_cover_registry() {
        let used = assessment_equations();
        assert_eq!(used.len(), ALL_EQUATIONS.len());
        for eq in ALL_EQUATIONS {
            assert!(used.contains(eq), "{:?} not used by the assessment", eq);
        }
    }

    #[test]
    fn test_markdown_has_every_equation_section() {
        let markdown = generate_equations_markdown();
        for eq in ALL_EQUATIONS {
            let meta = eq.metadata();
            assert!(markdown.contains(&format!("### {}\n", meta.name)), "{:?} missing", eq);
            assert!(markdown.contains(&format!("`{}`", meta.source_function)));
        }
        assert!(markdown.ends_with("15 equations in 6 categories.\n"));
    }

    #[test]
    fn test_generate_equations_markdown() {
        let markdown = generate_equations_markdown();

        assert!(markdown.contains("# Grounding Grid Equations Reference"));
        assert!(markdown.contains("Auto-generated from source code"));
        assert!(markdown.contains("## Soil Model"));
        assert!(markdown.contains("## Mesh Voltages"));
        assert!(markdown.contains("### Surface Layer Derating Factor"));
        assert!(markdown.contains("Ki = 0.644 + 0.148*sqrt(nw*nl)"));
        assert!(markdown.contains("IEEE Std 80-2013 p. 23, Eq. 27"));
        assert!(markdown.contains("calculations/resistance.rs"));
        assert!(markdown.contains("15 equations in 6 categories."));
    }
}
