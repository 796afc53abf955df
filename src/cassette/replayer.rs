//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Per port/method queues of recorded interactions, consumed in order.
///
/// Running out is reported as an error rather than a panic so an
/// interactive session can surface it as a notice and carry on.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), Vec<Interaction>>,
    cursors: HashMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing (more) was recorded for the pair.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, String> {
        let key = (port.to_string(), method.to_string());

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Available: [{}]",
                available.join(", ")
            ));
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let Some(interaction) = queue.get(*cursor) else {
            return Err(format!(
                "Cassette exhausted: all {} interactions for {port}::{method} have been consumed",
                queue.len()
            ));
        };
        *cursor += 1;
        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn interaction(seq: u64, port: &str, method: &str, text: &str) -> Interaction {
        Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input: json!({ "text": text }),
            output: json!({ "Ok": { "imageUrl": format!("https://img/{seq}.png") } }),
        }
    }

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette { name: "test".into(), recorded_at: Utc::now(), commit: "abc".into(), interactions }
    }

    #[test]
    fn replay_in_order() {
        let cassette = make_cassette(vec![
            interaction(0, "image_service", "request_image", "first"),
            interaction(1, "image_service", "request_image", "second"),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_interaction("image_service", "request_image").unwrap().seq, 0);
        assert_eq!(replayer.next_interaction("image_service", "request_image").unwrap().seq, 1);
    }

    #[test]
    fn ports_have_independent_cursors() {
        let cassette = make_cassette(vec![
            interaction(0, "image_service", "request_image", "a"),
            interaction(1, "image_fetcher", "fetch", "a"),
            interaction(2, "image_service", "request_image", "b"),
        ]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_interaction("image_fetcher", "fetch").unwrap().seq, 1);
        assert_eq!(replayer.next_interaction("image_service", "request_image").unwrap().seq, 0);
        assert_eq!(replayer.next_interaction("image_service", "request_image").unwrap().seq, 2);
    }

    #[test]
    fn exhausted_replayer_errors() {
        let cassette =
            make_cassette(vec![interaction(0, "image_service", "request_image", "only")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        assert!(replayer.next_interaction("image_service", "request_image").is_ok());
        let err = replayer.next_interaction("image_service", "request_image").unwrap_err();
        assert!(err.contains("have been consumed"), "{err}");
    }

    #[test]
    fn unknown_port_lists_available() {
        let cassette = make_cassette(vec![interaction(0, "image_fetcher", "fetch", "x")]);
        let mut replayer = CassetteReplayer::new(&cassette);

        let err = replayer.next_interaction("image_service", "request_image").unwrap_err();
        assert!(err.contains("no interactions recorded"), "{err}");
        assert!(err.contains("image_fetcher::fetch"), "{err}");
    }
}
