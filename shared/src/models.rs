use serde::{Serialize, Deserialize, Serializer, Deserializer, de::Error as _};
use std::collections::HashMap;
use crate::error::PollError;

pub const POLL_CREATED_MESSAGE: &str = "Poll created successfully!";
pub const VOTE_CAST_MESSAGE: &str = "Vote cast successfully!";

/// Option identifiers are the decimal form of the option's creation-time position.
pub fn option_id(index: usize) -> String {
    index.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOption {
    pub text: String,
    pub votes: u64,
}

impl PollOption {
    fn new(text: String) -> Self {
        Self { text, votes: 0 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poll {
    id: String,
    question: String,
    options: Vec<PollOption>,
}

impl Poll {
    /// Builds a fully populated poll with every counter at zero.
    /// The request is expected to have passed `validate_poll_request`.
    pub fn new(id: impl Into<String>, request: CreatePollRequest) -> Self {
        Self {
            id: id.into(),
            question: request.question,
            options: request.options.into_iter().map(PollOption::new).collect(),
        }
    }

    pub fn id(&self) -> &str { &self.id }

    pub fn question(&self) -> &str { &self.question }

    pub fn options(&self) -> &[PollOption] { &self.options }

    /// Resolves an option identifier to its position. Only the canonical
    /// decimal form matches, so "01" or "+1" address nothing.
    pub fn option_index(&self, option_id: &str) -> Option<usize> {
        option_id
            .parse::<usize>()
            .ok()
            .filter(|&idx| idx < self.options.len() && self::option_id(idx) == option_id)
    }

    pub fn votes_for(&self, option_id: &str) -> Option<u64> {
        self.option_index(option_id).map(|idx| self.options[idx].votes)
    }

    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|opt| opt.votes).sum()
    }

    /// Adds one vote to the addressed option and returns its new count.
    pub fn record_vote(&mut self, option_id: &str) -> Result<u64, PollError> {
        let idx = self
            .option_index(option_id)
            .ok_or_else(|| PollError::InvalidOption(option_id.to_string()))?;
        let option = &mut self.options[idx];
        option.votes += 1;
        Ok(option.votes)
    }

    pub fn data(&self) -> PollData {
        PollData {
            question: self.question.clone(),
            options: self.options.iter().map(|opt| opt.text.clone()).collect(),
            votes: self.options.iter().map(|opt| opt.votes).collect(),
        }
    }

    pub fn results(&self) -> PollResults {
        PollResults {
            question: self.question.clone(),
            results: self
                .options
                .iter()
                .map(|opt| OptionResult { option: opt.text.clone(), votes: opt.votes })
                .collect(),
        }
    }
}

/// Sequence rendered on the wire as an object keyed by option identifier,
/// in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap<T>(pub Vec<T>);

impl<T> OptionMap<T> {
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn get(&self, option_id: &str) -> Option<&T> {
        self.0
            .iter()
            .enumerate()
            .find(|(idx, _)| self::option_id(*idx) == option_id)
            .map(|(_, value)| value)
    }
}

impl<T> FromIterator<T> for OptionMap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Serialize> Serialize for OptionMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().enumerate().map(|(idx, value)| (option_id(idx), value)))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut entries = HashMap::<String, T>::deserialize(deserializer)?;
        let len = entries.len();
        (0..len)
            .map(|idx| {
                entries
                    .remove(&option_id(idx))
                    .ok_or_else(|| D::Error::custom(format!("missing option id {}", idx)))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(OptionMap)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePollRequest {
    pub question: String,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollData {
    pub question: String,
    pub options: OptionMap<String>,
    pub votes: OptionMap<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePollResponse {
    pub message: String,
    pub poll_id: String,
    pub poll_data: PollData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionResult {
    pub option: String,
    pub votes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollResults {
    pub question: String,
    pub results: Vec<OptionResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PollResultsResponse {
    pub poll_id: String,
    pub poll_results: PollResults,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteResponse {
    pub message: String,
    pub poll_id: String,
    pub voted_for_option: String,
}

impl CreatePollResponse {
    pub fn new(poll: &Poll) -> Self {
        Self {
            message: POLL_CREATED_MESSAGE.into(),
            poll_id: poll.id().to_string(),
            poll_data: poll.data(),
        }
    }
}

impl PollResultsResponse {
    pub fn new(poll: &Poll) -> Self {
        Self {
            poll_id: poll.id().to_string(),
            poll_results: poll.results(),
        }
    }
}

impl VoteResponse {
    pub fn new(poll_id: impl Into<String>, option_id: impl Into<String>) -> Self {
        Self {
            message: VOTE_CAST_MESSAGE.into(),
            poll_id: poll_id.into(),
            voted_for_option: option_id.into(),
        }
    }
}
