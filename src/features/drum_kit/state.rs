use crate::flow::FeatureState;

/// One playable pad.
#[derive(Debug, Clone, PartialEq)]
pub struct Pad {
    pub key: char,
    pub sample: &'static str,
    /// Highlighted until the strike decays.
    pub lit: bool,
    pub hits: u64,
}

/// The nine-pad kit, home row left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct DrumKitState {
    pub pads: Vec<Pad>,
}

impl Default for DrumKitState {
    fn default() -> Self {
        let pads = [
            ('a', "clap"),
            ('s', "hihat"),
            ('d', "kick"),
            ('f', "openhat"),
            ('g', "boom"),
            ('h', "ride"),
            ('j', "snare"),
            ('k', "tom"),
            ('l', "tink"),
        ]
        .into_iter()
        .map(|(key, sample)| Pad {
            key,
            sample,
            lit: false,
            hits: 0,
        })
        .collect();
        Self { pads }
    }
}

impl FeatureState for DrumKitState {}

impl DrumKitState {
    pub fn pad(&self, key: char) -> Option<&Pad> {
        self.pads.iter().find(|pad| pad.key == key)
    }

    pub fn total_hits(&self) -> u64 {
        self.pads.iter().map(|pad| pad.hits).sum()
    }

    pub fn lit_keys(&self) -> Vec<char> {
        self.pads
            .iter()
            .filter(|pad| pad.lit)
            .map(|pad| pad.key)
            .collect()
    }
}
