//! Synthetic dataset generation
//!
//! Builds a resource pool and a literal pool, each of `triple_count / 50` entries, then
//! draws `triple_count` triples from them. Subjects are uniform over the resources,
//! objects are a coin flip between a uniform resource and a uniform literal, and
//! predicates are copied from earlier predicate slots chosen by an exponentially
//! decaying index, so a handful of predicate strings dominate the dataset.

use crate::config::BenchConfig;
use crate::core::{GeneratedTriple, LiteralValue, Object};
use crate::error::Result;
use crate::generator::random::SeededRandom;
use std::collections::HashSet;
use std::rc::Rc;

const RESOURCE_LENGTH: (usize, usize) = (4, 30);
const LITERAL_LENGTH: (usize, usize) = (10, 100);
const DATATYPE_LENGTH: (usize, usize) = (20, 40);
const LANGUAGE_LENGTH: (usize, usize) = (2, 5);

/// Decay rate of the predicate index distribution, mean index is `1 / rate`.
const PREDICATE_DECAY: f64 = 0.05;

/// Generated pools and the three parallel triple sequences.
#[derive(Debug, Clone)]
pub struct Dataset {
    resources: Vec<Rc<str>>,
    literals: Vec<Rc<LiteralValue>>,
    subjects: Vec<Rc<str>>,
    predicates: Vec<Rc<str>>,
    objects: Vec<Object>,
}

impl Dataset {
    /// Generate a dataset of `config.triple_count` triples, drawing from `rng`.
    pub fn generate(config: &BenchConfig, rng: &mut SeededRandom) -> Result<Self> {
        config.validate()?;
        let pool_size = config.pool_size();
        let triple_count = config.triple_count;

        let resources: Vec<Rc<str>> = rng
            .random_strings(pool_size, RESOURCE_LENGTH.0, RESOURCE_LENGTH.1, &config.namespace)
            .into_iter()
            .map(Rc::from)
            .collect();
        let literals = generate_literals(rng, pool_size);
        log::debug!("Generated {} resources and {} literals", resources.len(), literals.len());

        let mut subjects = Vec::with_capacity(triple_count);
        let mut predicates: Vec<Rc<str>> = Vec::with_capacity(triple_count);
        let mut objects = Vec::with_capacity(triple_count);

        // Predicates must be filled in order: slot i may copy any earlier slot.
        for i in 0..triple_count {
            subjects.push(Rc::clone(&resources[rng.index(pool_size)]));

            let weighted = weighted_index(rng, pool_size);
            let predicate = if weighted < i {
                Rc::clone(&predicates[weighted])
            } else {
                Rc::clone(&resources[weighted.min(pool_size - 1)])
            };
            predicates.push(predicate);

            let object = if rng.random() < 0.5 {
                Object::Resource(Rc::clone(&resources[rng.index(pool_size)]))
            } else {
                Object::Literal(Rc::clone(&literals[rng.index(pool_size)]))
            };
            objects.push(object);
        }

        let dataset = Self { resources, literals, subjects, predicates, objects };
        log::debug!(
            "Generated {} triples using {} distinct predicates",
            dataset.len(),
            dataset.distinct_predicate_count()
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn resources(&self) -> &[Rc<str>] {
        &self.resources
    }

    pub fn literals(&self) -> &[Rc<LiteralValue>] {
        &self.literals
    }

    pub fn subjects(&self) -> &[Rc<str>] {
        &self.subjects
    }

    pub fn predicates(&self) -> &[Rc<str>] {
        &self.predicates
    }

    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Triple at position `index`, if any.
    pub fn triple(&self, index: usize) -> Option<GeneratedTriple<'_>> {
        Some(GeneratedTriple {
            subject: self.subjects.get(index)?,
            predicate: self.predicates.get(index)?,
            object: self.objects.get(index)?,
        })
    }

    /// Triples in generation order.
    pub fn triples(&self) -> impl Iterator<Item = GeneratedTriple<'_>> + '_ {
        self.subjects.iter().zip(&self.predicates).zip(&self.objects).map(
            |((subject, predicate), object)| GeneratedTriple { subject, predicate, object },
        )
    }

    /// Number of distinct predicate strings across all triples.
    pub fn distinct_predicate_count(&self) -> usize {
        self.predicates.iter().map(|p| &**p).collect::<HashSet<&str>>().len()
    }
}

fn generate_literals(rng: &mut SeededRandom, pool_size: usize) -> Vec<Rc<LiteralValue>> {
    let values = rng.random_strings(pool_size, LITERAL_LENGTH.0, LITERAL_LENGTH.1, "");
    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let literal = match i % 3 {
                1 => {
                    let length = rng.random_len(DATATYPE_LENGTH.0, DATATYPE_LENGTH.1);
                    LiteralValue::typed(value, rng.random_string(length))
                }
                2 => {
                    let length = rng.random_len(LANGUAGE_LENGTH.0, LANGUAGE_LENGTH.1);
                    LiteralValue::language_tagged(value, rng.random_string(length))
                }
                _ => LiteralValue::plain(value),
            };
            Rc::new(literal)
        })
        .collect()
}

/// `min(floor(ln(1 - r) / -rate), randInt(0, pool_size))`.
fn weighted_index(rng: &mut SeededRandom, pool_size: usize) -> usize {
    let decayed = ((1.0 - rng.random()).ln() / -PREDICATE_DECAY).floor();
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    let cap = rng.rand_int(0, pool_size as i64) as usize;
    // `decayed` is never negative since 1 - r lies in (0, 1]; the cast saturates.
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    let decayed = decayed as usize;
    decayed.min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(triple_count: usize) -> BenchConfig {
        BenchConfig { triple_count, ..Default::default() }
    }

    #[test]
    fn test_weighted_index_bounded_by_pool() {
        let mut rng = SeededRandom::default();
        for _ in 0..10_000 {
            assert!(weighted_index(&mut rng, 20) <= 20);
        }
    }

    #[test]
    fn test_first_predicate_is_a_resource() {
        let mut rng = SeededRandom::default();
        let dataset = Dataset::generate(&small_config(1000), &mut rng).unwrap();
        assert!(dataset.resources().contains(&dataset.predicates()[0]));
    }

    #[test]
    fn test_literal_tags_cycle() {
        let mut rng = SeededRandom::default();
        let dataset = Dataset::generate(&small_config(3000), &mut rng).unwrap();
        for (i, literal) in dataset.literals().iter().enumerate() {
            match i % 3 {
                0 => assert!(literal.datatype().is_none() && literal.language().is_none()),
                1 => assert!(literal.datatype().is_some() && literal.language().is_none()),
                _ => assert!(literal.datatype().is_none() && literal.language().is_some()),
            }
        }
    }

    #[test]
    fn test_triple_view() {
        let mut rng = SeededRandom::default();
        let dataset = Dataset::generate(&small_config(100), &mut rng).unwrap();
        let triple = dataset.triple(5).unwrap();
        assert_eq!(triple.subject, &*dataset.subjects()[5]);
        assert_eq!(triple.object, &dataset.objects()[5]);
        assert!(dataset.triple(100).is_none());
        assert_eq!(dataset.triples().count(), 100);
    }
}
