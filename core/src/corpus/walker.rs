use log::debug;
use std::path::PathBuf;
use std::vec;

use crate::error::{NlstError, Result};
use crate::types::{Patient, Series, Study};

use super::layout::{listing_id, CorpusLayout};

/// One (patient, study, series-list) triple produced by [`HierarchyWalker`]
#[derive(Debug, Clone, PartialEq)]
pub struct StudyTriple {
    /// Listing the patient came from
    pub listing_id: String,
    pub patient: Patient,
    /// The study, with its series moved out into `series`
    pub study: Study,
    pub series: Vec<Series>,
}

/// Events emitted while walking, for progress reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkEvent {
    /// A listing document was loaded
    ListingOpened { patients: usize },
    /// All triples of the current listing have been emitted
    ListingFinished,
}

/// Lazy walk over listing documents and their study documents
///
/// Yields every triple of one listing before moving to the next. Stops
/// after the first error; a fresh walker rescans from the start.
pub struct HierarchyWalker<'a> {
    layout: &'a CorpusLayout,
    pending: vec::IntoIter<PathBuf>,
    current: Option<ListingCursor>,
    failed: bool,
    on_event: Option<Box<dyn FnMut(WalkEvent) + 'a>>,
}

struct ListingCursor {
    listing_id: String,
    patients: Vec<Patient>,
    patient_index: usize,
    study_index: usize,
}

impl ListingCursor {
    /// Next (patient, study identifier) pair of this listing
    fn advance(&mut self) -> Option<(&Patient, &str)> {
        while let Some(patient) = self.patients.get(self.patient_index) {
            if let Some(ident) = patient.study_identifiers.get(self.study_index) {
                self.study_index += 1;
                return Some((patient, ident.study_identifier.as_str()));
            }
            self.patient_index += 1;
            self.study_index = 0;
        }
        None
    }
}

impl<'a> HierarchyWalker<'a> {
    /// Starts a walk, listing the corpus' listing documents up front
    pub fn new(layout: &'a CorpusLayout) -> Result<Self> {
        let listings = layout.listing_files()?;
        debug!(
            "Found {} listing documents in {}",
            listings.len(),
            layout.listing_dir().display()
        );
        Ok(Self {
            layout,
            pending: listings.into_iter(),
            current: None,
            failed: false,
            on_event: None,
        })
    }

    /// Number of listing documents not yet opened
    pub fn remaining_listings(&self) -> usize {
        self.pending.len()
    }

    /// Registers a callback for listing open/finish events
    pub fn on_event(mut self, callback: impl FnMut(WalkEvent) + 'a) -> Self {
        self.on_event = Some(Box::new(callback));
        self
    }

    fn emit(&mut self, event: WalkEvent) {
        if let Some(callback) = self.on_event.as_mut() {
            callback(event);
        }
    }

    fn fail(&mut self, err: NlstError) -> Option<Result<StudyTriple>> {
        self.failed = true;
        self.current = None;
        Some(Err(err))
    }

    fn open_next_listing(&mut self) -> Option<Result<()>> {
        let path = self.pending.next()?;
        let opened = listing_id(&path).and_then(|id| {
            let listing = self.layout.load_listing(&path)?;
            Ok((id, listing))
        });
        Some(opened.map(|(id, listing)| {
            let patients = listing.result_set.len();
            debug!("Listing {} has {} patients", id, patients);
            self.current = Some(ListingCursor {
                listing_id: id,
                patients: listing.result_set,
                patient_index: 0,
                study_index: 0,
            });
            self.emit(WalkEvent::ListingOpened { patients });
        }))
    }
}

impl<'a> Iterator for HierarchyWalker<'a> {
    type Item = Result<StudyTriple>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let next = self.current.as_mut().and_then(|cursor| {
                let listing_id = cursor.listing_id.clone();
                cursor
                    .advance()
                    .map(|(patient, ident)| (listing_id, patient.clone(), ident.to_string()))
            });

            match next {
                Some((listing_id, patient, ident)) => {
                    return match self.layout.load_study(&listing_id, &patient.subject_id, &ident)
                    {
                        Ok(mut study) => {
                            let series = std::mem::take(&mut study.series_list);
                            Some(Ok(StudyTriple {
                                listing_id,
                                patient,
                                study,
                                series,
                            }))
                        }
                        Err(err) => self.fail(err),
                    };
                }
                None => {
                    if self.current.take().is_some() {
                        self.emit(WalkEvent::ListingFinished);
                    }
                    match self.open_next_listing()? {
                        Ok(()) => continue,
                        Err(err) => return self.fail(err),
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{patient_json, series_json, study_json, TestCorpus};
    use std::cell::RefCell;

    fn two_listing_corpus() -> TestCorpus {
        let corpus = TestCorpus::new();
        corpus.write_listing(
            "1",
            vec![
                patient_json(1, "100001", &["11", "12"]),
                patient_json(2, "100002", &[]),
                patient_json(3, "100003", &["31"]),
            ],
        );
        corpus.write_listing("2", vec![patient_json(4, "100004", &["41"])]);

        for (listing, subject, ident, id) in [
            ("1", "100001", "11", 11),
            ("1", "100001", "12", 12),
            ("1", "100003", "31", 31),
            ("2", "100004", "41", 41),
        ] {
            corpus.write_study(
                listing,
                subject,
                ident,
                vec![study_json(
                    id,
                    &format!("1.2.{}", id),
                    vec![series_json(id * 10, "", None), series_json(id * 10 + 1, "", None)],
                )],
            );
        }
        corpus
    }

    #[test]
    fn test_walk_order_and_contents() {
        let corpus = two_listing_corpus();
        let layout = CorpusLayout::new(corpus.root());

        let triples: Vec<StudyTriple> = HierarchyWalker::new(&layout)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        let keys: Vec<(String, i64, i64)> = triples
            .iter()
            .map(|t| (t.listing_id.clone(), t.patient.id, t.study.id))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("1".to_string(), 1, 11),
                ("1".to_string(), 1, 12),
                ("1".to_string(), 3, 31),
                ("2".to_string(), 4, 41),
            ]
        );

        for triple in &triples {
            assert_eq!(triple.series.len(), 2);
            assert!(triple.study.series_list.is_empty());
        }
    }

    #[test]
    fn test_walk_events() {
        let corpus = two_listing_corpus();
        let layout = CorpusLayout::new(corpus.root());
        let events = RefCell::new(Vec::new());

        let count = HierarchyWalker::new(&layout)
            .unwrap()
            .on_event(|e| events.borrow_mut().push(e))
            .count();

        assert_eq!(count, 4);
        assert_eq!(
            events.into_inner(),
            vec![
                WalkEvent::ListingOpened { patients: 3 },
                WalkEvent::ListingFinished,
                WalkEvent::ListingOpened { patients: 1 },
                WalkEvent::ListingFinished,
            ]
        );
    }

    #[test]
    fn test_walk_stops_after_error() {
        let corpus = TestCorpus::new();
        corpus.write_listing("1", vec![patient_json(1, "100001", &["11", "12"])]);
        corpus.write_study(
            "1",
            "100001",
            "11",
            vec![study_json(11, "1.2.11", vec![]), study_json(11, "1.2.11", vec![])],
        );
        corpus.write_study("1", "100001", "12", vec![study_json(12, "1.2.12", vec![])]);

        let layout = CorpusLayout::new(corpus.root());
        let mut walker = HierarchyWalker::new(&layout).unwrap();

        let first = walker.next().unwrap();
        assert!(first.unwrap_err().is_malformed_input());
        assert!(walker.next().is_none());
    }

    #[test]
    fn test_walk_empty_listing_dir() {
        let corpus = TestCorpus::new();
        std::fs::create_dir_all(corpus.root().join("patient")).unwrap();

        let layout = CorpusLayout::new(corpus.root());
        let walker = HierarchyWalker::new(&layout).unwrap();
        assert_eq!(walker.remaining_listings(), 0);
        assert_eq!(walker.count(), 0);
    }
}
