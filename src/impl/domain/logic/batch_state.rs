use crate::ext::standard_payers::is_area_batch_payer;

/// Principal, fee and tax of one record or of a whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Totals {
    pub principal: f64,
    pub fee: f64,
    pub tax: f64,
}

impl Totals {
    pub(crate) fn total(&self) -> f64 {
        self.principal + self.fee + self.tax
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.principal == 0.0 && self.fee == 0.0 && self.tax == 0.0
    }

    fn add(&mut self, other: &Totals) {
        self.principal += other.principal;
        self.fee += other.fee;
        self.tax += other.tax;
    }
}

/// What the batch machine needs to know about a record.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BatchSignal<'a> {
    pub area: Option<&'a str>,
    pub grouped: bool,
    pub description: &'a str,
    pub amounts: Totals,
}

/// When a batch was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Closure {
    /// Closed by a later record (area change, or a record without area).
    MidRun,
    EndOfInput,
}

/// A closed batch, to be emitted as one settlement row.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Settlement {
    Area {
        label: String,
        totals: Totals,
        closure: Closure,
    },
    Group {
        /// Description to use for the memo; `None` selects the generated
        /// "N items" phrase.
        seed: Option<String>,
        count: usize,
        totals: Totals,
    },
}

impl Settlement {
    pub(crate) fn amount(&self) -> f64 {
        match self {
            Settlement::Area { totals, .. } | Settlement::Group { totals, .. } => totals.total(),
        }
    }
}

/// How the current record itself is to be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Disposition {
    /// Member of an open batch: no settlement row of its own.
    Batched,
    /// Area mode, no area: expense rows only, never settled per record.
    Unsettled,
    /// Settled on its own, right after its expense rows.
    Standalone,
    /// Zero-amount record that only closed a group; emits nothing.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BatchStep {
    /// Batch closed by this record; must be emitted before the record's rows.
    pub flushed: Option<Settlement>,
    pub disposition: Disposition,
}

#[derive(Debug)]
pub(crate) struct OpenArea {
    label: String,
    totals: Totals,
}

#[derive(Debug)]
pub(crate) struct OpenGroup {
    totals: Totals,
    count: usize,
    first_description: String,
    last_description: String,
}

/// Run-scoped settlement batching. The mode is fixed at construction from the
/// payer identity, so area and group batches never coexist.
///
/// Every record amount ends up in exactly one settlement: either its own
/// (standalone) or the one of the batch it joined. A batch's sums leave the
/// machine only when the batch is flushed.
#[derive(Debug)]
pub(crate) enum BatchState {
    Area(Option<OpenArea>),
    Group(Option<OpenGroup>),
}

impl BatchState {
    pub(crate) fn for_payer(payer: &str) -> Self {
        if is_area_batch_payer(payer) {
            BatchState::Area(None)
        } else {
            BatchState::Group(None)
        }
    }

    pub(crate) fn is_area_mode(&self) -> bool {
        matches!(self, BatchState::Area(_))
    }

    pub(crate) fn step(&mut self, signal: &BatchSignal) -> BatchStep {
        match self {
            BatchState::Area(open) => Self::step_area(open, signal),
            BatchState::Group(open) => Self::step_group(open, signal),
        }
    }

    /// Flushes whatever batch is still open after the last record.
    pub(crate) fn finish(self) -> Option<Settlement> {
        match self {
            BatchState::Area(open) => open.map(|area| {
                tracing::debug!(area = %area.label, total = area.totals.total(), "closing area at end of input");
                Settlement::Area {
                    label: area.label,
                    totals: area.totals,
                    closure: Closure::EndOfInput,
                }
            }),
            BatchState::Group(open) => open.map(|group| {
                tracing::debug!(
                    count = group.count,
                    total = group.totals.total(),
                    "closing group at end of input"
                );
                let seed = [group.last_description, group.first_description]
                    .into_iter()
                    .find(|d| !d.is_empty());
                Settlement::Group {
                    seed,
                    count: group.count,
                    totals: group.totals,
                }
            }),
        }
    }

    fn step_area(open: &mut Option<OpenArea>, signal: &BatchSignal) -> BatchStep {
        let label = signal.area.filter(|a| !a.is_empty());
        let same_area = matches!(
            (open.as_ref(), label),
            (Some(current), Some(label)) if current.label == label
        );
        let flushed = if same_area {
            None
        } else {
            open.take().map(|area| {
                tracing::debug!(area = %area.label, total = area.totals.total(), "closing area");
                Settlement::Area {
                    label: area.label,
                    totals: area.totals,
                    closure: Closure::MidRun,
                }
            })
        };

        let Some(label) = label else {
            return BatchStep {
                flushed,
                disposition: Disposition::Unsettled,
            };
        };
        let area = open.get_or_insert_with(|| {
            tracing::debug!(area = %label, "opening area");
            OpenArea {
                label: label.to_string(),
                totals: Totals::default(),
            }
        });
        area.totals.add(&signal.amounts);
        BatchStep {
            flushed,
            disposition: Disposition::Batched,
        }
    }

    fn step_group(open: &mut Option<OpenGroup>, signal: &BatchSignal) -> BatchStep {
        if signal.grouped {
            let group = open.get_or_insert_with(|| {
                tracing::debug!("opening group");
                OpenGroup {
                    totals: Totals::default(),
                    count: 0,
                    first_description: signal.description.to_string(),
                    last_description: String::new(),
                }
            });
            group.last_description = signal.description.to_string();
            group.count += 1;
            group.totals.add(&signal.amounts);
            return BatchStep {
                flushed: None,
                disposition: Disposition::Batched,
            };
        }

        let flushed = open.take().map(|group| {
            tracing::debug!(
                count = group.count,
                total = group.totals.total(),
                "closing group"
            );
            Settlement::Group {
                seed: Some(signal.description.to_string()).filter(|d| !d.is_empty()),
                count: group.count,
                totals: group.totals,
            }
        });
        let disposition = if flushed.is_some() && signal.amounts.is_zero() {
            Disposition::Skipped
        } else {
            Disposition::Standalone
        };
        BatchStep {
            flushed,
            disposition,
        }
    }
}
