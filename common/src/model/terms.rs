//! Static academic-term and subject tables.
//!
//! These tables are configuration, not data the store owns: the term display
//! key is what lesson records and the UI use, while the folder key names the
//! on-disk directory the PDF resolver looks under.

/// An academic term: the key shown in the UI (and stored on lessons) and the
/// storage-folder name used by the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub display: &'static str,
    pub folder: &'static str,
}

pub const TERMS: &[Term] = &[
    Term { display: "1年前期", folder: "1年1期" },
    Term { display: "1年後期", folder: "1年2期" },
    Term { display: "2年前期", folder: "2年1期" },
    Term { display: "2年後期", folder: "2年2期" },
];

const FIRST_YEAR_FIRST: &[&str] = &[
    "化学",
    "化学演習",
    "機能形態学1",
    "数学1",
    "数学1演習",
    "生物学",
    "生物学演習",
    "物理学",
    "物理学演習",
    "有機化学1",
];

const FIRST_YEAR_SECOND: &[&str] = &[
    "生薬学",
    "有機化学2",
    "数学2",
    "物理化学1",
    "分析化学1",
    "生化学1",
    "基礎薬理学",
    "機能形態学2",
];

const SECOND_YEAR_FIRST: &[&str] = &[
    "分子細胞生物学1",
    "生化学2",
    "有機化学3",
    "基礎漢方薬学",
    "薬理薬物治療学1A",
    "薬理薬物治療学1B",
    "機能形態学3",
    "薬物治療マネジメント",
    "分析化学2",
    "物理化学2",
];

const SECOND_YEAR_SECOND: &[&str] = &[
    "薬理薬物治療学2A",
    "薬理薬物治療学2B",
    "衛生薬学1",
    "分子細胞生物学2",
    "免疫学",
    "微生物学",
    "生物薬剤学",
    "物理薬剤学",
    "有機化学4",
    "有機スペクトル解析学",
    "数理統計学",
    "医療心理学",
];

/// Subjects taught in the given term (by display key). Unknown terms yield an
/// empty list rather than an error, mirroring how the UI treats them.
pub fn subjects_for(term_display: &str) -> &'static [&'static str] {
    match term_display {
        "1年前期" => FIRST_YEAR_FIRST,
        "1年後期" => FIRST_YEAR_SECOND,
        "2年前期" => SECOND_YEAR_FIRST,
        "2年後期" => SECOND_YEAR_SECOND,
        _ => &[],
    }
}

/// Storage-folder name for a term display key. Unknown keys yield `None`;
/// guessing a folder would point document links at the wrong directory.
pub fn folder_for(term_display: &str) -> Option<&'static str> {
    TERMS
        .iter()
        .find(|t| t.display == term_display)
        .map(|t| t.folder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_term_has_a_folder_and_subjects() {
        for term in TERMS {
            assert_eq!(folder_for(term.display), Some(term.folder));
            assert!(!subjects_for(term.display).is_empty());
        }
    }

    #[test]
    fn unknown_terms_resolve_to_nothing() {
        assert_eq!(folder_for("3年前期"), None);
        assert!(subjects_for("3年前期").is_empty());
    }
}
