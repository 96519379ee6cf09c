//! Controlled vocabularies for MITE entries.
//!
//! Every vocabulary is a closed enum whose serialized form is its wire label
//! (`"Biaryl bond formation"`, `"pending"`, ...). Decoders go through
//! [`Status::parse`] and friends so that an out-of-vocabulary value is caught
//! exactly once, at the leaf.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Declare a vocabulary enum with its wire labels.
///
/// Generates the enum plus `ALL`, `as_str()`, `parse()` and `Display`.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// Look up a variant by its exact wire label.
            #[must_use]
            pub fn parse(raw: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|variant| variant.as_str() == raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

vocabulary! {
    /// Curation status of an entry.
    ///
    /// ```text
    /// pending → active → retired
    /// ```
    Status {
        Pending => "pending",
        Active => "active",
        Retired => "retired",
    }
}

// ---------------------------------------------------------------------------
// Quality
// ---------------------------------------------------------------------------

vocabulary! {
    /// Annotation quality assigned by reviewers.
    Quality {
        Questionable => "questionable",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

// ---------------------------------------------------------------------------
// TailoringFunction
// ---------------------------------------------------------------------------

vocabulary! {
    /// Chemical transformation performed by a tailoring reaction.
    TailoringFunction {
        Acetylation => "Acetylation",
        Acylation => "Acylation",
        Amination => "Amination",
        BiarylBondFormation => "Biaryl bond formation",
        Carboxylation => "Carboxylation",
        Cyclization => "Cyclization",
        Deamination => "Deamination",
        Decarboxylation => "Decarboxylation",
        Dehydration => "Dehydration",
        Dehydrogenation => "Dehydrogenation",
        Demethylation => "Demethylation",
        Dethiolation => "Dethiolation",
        Epimerization => "Epimerization",
        Epoxidation => "Epoxidation",
        Glycosylation => "Glycosylation",
        Halogenation => "Halogenation",
        Heterocyclization => "Heterocyclization",
        Hydrolysis => "Hydrolysis",
        Hydroxylation => "Hydroxylation",
        MacrolactamFormation => "Macrolactam formation",
        MacrolactoneFormation => "Macrolactone formation",
        Methylation => "Methylation",
        Oxidation => "Oxidation",
        Phosphorylation => "Phosphorylation",
        Prenylation => "Prenylation",
        Reduction => "Reduction",
        Sulfation => "Sulfation",
        Sulfonation => "Sulfonation",
        Other => "Other",
    }
}

// ---------------------------------------------------------------------------
// EvidenceCode
// ---------------------------------------------------------------------------

vocabulary! {
    /// Kind of experimental support for a reaction.
    EvidenceCode {
        HeterologousExpression => "Heterologous expression",
        InVitroAssay => "In vitro assay",
        KnockOutStudies => "Knock-out studies",
        SiteDirectedMutagenesis => "Site-directed mutagenesis",
        StructureBasedInference => "Structure-based inference",
        IsotopeLabelling => "Isotope labelling",
        GenomicMetabolomicCorrelation => "Correlation of genomic and metabolomic data",
        Other => "Other",
    }
}
