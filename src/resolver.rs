// jd-dict Collision Resolver
// Assigns each candidate the shortest code prefix not yet taken

use crate::assemble::head;
use crate::dictionary::ExistingDictionary;
use crate::types::{Candidate, Entry};
use rustc_hash::FxHashSet;

/// Single-pass collision-resolution context
///
/// Probes code prefixes from the candidate's floor length up to the full
/// 6 keys, against the pre-existing code space and the codes claimed
/// earlier in this pass. Strictly order-dependent: the first candidate in
/// input order wins the shortest code. `resolve` consumes the resolver,
/// so one context can never span two runs.
pub struct Resolver<'a> {
    existing: &'a ExistingDictionary,
    claimed: FxHashSet<String>,
    emitted: FxHashSet<(String, String)>,
}

impl<'a> Resolver<'a> {
    pub fn new(existing: &'a ExistingDictionary) -> Self {
        Self {
            existing,
            claimed: FxHashSet::default(),
            emitted: FxHashSet::default(),
        }
    }

    /// Resolve candidates, in order, into final entries
    ///
    /// Output is deduplicated by exact `(word, code)` pair, keeping the
    /// first occurrence, and preserves candidate order otherwise.
    pub fn resolve(mut self, candidates: Vec<Candidate>) -> Vec<Entry> {
        let mut out = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            self.resolve_one(candidate, &mut out);
        }
        out
    }

    fn resolve_one(&mut self, candidate: Candidate, out: &mut Vec<Entry>) {
        let code = candidate.code.as_str();
        let full = code.chars().count().min(6);

        for len in candidate.min_probe_len()..=full {
            let prefix = head(code, len);
            if self.existing.is_used(prefix) || self.claimed.contains(prefix) {
                continue;
            }
            if self.emitted.insert((candidate.word.clone(), prefix.to_string())) {
                self.claimed.insert(prefix.to_string());
                out.push(Entry::new(&candidate.word, prefix));
            }
            return;
        }

        // Every probe length is taken: emit the full code as a deliberate
        // duplicate. The fallback code is not claimed.
        let fallback = head(code, full);
        if self.emitted.insert((candidate.word.clone(), fallback.to_string())) {
            out.push(Entry::new(&candidate.word, fallback));
        }
    }
}
