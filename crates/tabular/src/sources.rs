//! The four known ECG dataset resources

use std::path::{Path, PathBuf};

use serde::Serialize;

/// One of the four CSV resources the dashboard knows how to audit.
///
/// The loads are mutually independent; each produces its own fresh
/// [`crate::TabularDataset`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetKind {
    MitbihTrain,
    MitbihTest,
    PtbdbNormal,
    PtbdbAbnormal,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::MitbihTrain,
        DatasetKind::MitbihTest,
        DatasetKind::PtbdbNormal,
        DatasetKind::PtbdbAbnormal,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DatasetKind::MitbihTrain => "mitbih_train.csv",
            DatasetKind::MitbihTest => "mitbih_test.csv",
            DatasetKind::PtbdbNormal => "ptbdb_normal.csv",
            DatasetKind::PtbdbAbnormal => "ptbdb_abnormal.csv",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DatasetKind::MitbihTrain => "MIT-BIH Train",
            DatasetKind::MitbihTest => "MIT-BIH Test",
            DatasetKind::PtbdbNormal => "PTBDB Normal",
            DatasetKind::PtbdbAbnormal => "PTBDB Abnormal",
        }
    }

    /// Short selector label, as shown in the dataset picker.
    pub fn slug(&self) -> &'static str {
        match self {
            DatasetKind::MitbihTrain => "train",
            DatasetKind::MitbihTest => "test",
            DatasetKind::PtbdbNormal => "normal",
            DatasetKind::PtbdbAbnormal => "abnormal",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.slug().eq_ignore_ascii_case(s.trim()))
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for kind in DatasetKind::ALL {
            assert_eq!(DatasetKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(DatasetKind::from_slug("Abnormal"), Some(DatasetKind::PtbdbAbnormal));
        assert_eq!(DatasetKind::from_slug(" train "), Some(DatasetKind::MitbihTrain));
        assert_eq!(DatasetKind::from_slug("bogus"), None);
    }

    #[test]
    fn test_file_names_are_distinct() {
        let mut names: Vec<_> = DatasetKind::ALL.iter().map(|k| k.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 4);
    }
}
