/// Explicit conversation state, advanced one step per committed assistant
/// reply. Each variant names the answer the assistant is currently waiting
/// for; `Done` is absorbing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversationStage {
    What,
    Why,
    Highlight,
    Lowlight,
    Tomorrow,
    Done,
}

impl ConversationStage {
    /// Pure transition function: the stage after one more assistant reply.
    pub fn advance(self) -> Self {
        match self {
            Self::What => Self::Why,
            Self::Why => Self::Highlight,
            Self::Highlight => Self::Lowlight,
            Self::Lowlight => Self::Tomorrow,
            Self::Tomorrow | Self::Done => Self::Done,
        }
    }

    /// Recover the stage from the transcript length before a user turn.
    ///
    /// `None` means the length matches no point in the scripted flow; the
    /// engine answers with a filler reply in that case.
    pub fn from_transcript_len(len: usize) -> Option<Self> {
        match len {
            1 => Some(Self::What),
            3 => Some(Self::Why),
            5 => Some(Self::Highlight),
            7 => Some(Self::Lowlight),
            n if n >= 9 => Some(Self::Done),
            _ => None,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_walks_the_scripted_flow_in_order() {
        let mut stage = ConversationStage::What;
        let expected = [
            ConversationStage::Why,
            ConversationStage::Highlight,
            ConversationStage::Lowlight,
            ConversationStage::Tomorrow,
            ConversationStage::Done,
        ];
        for step in expected {
            stage = stage.advance();
            assert_eq!(stage, step);
        }
    }

    #[test]
    fn done_is_absorbing() {
        assert_eq!(ConversationStage::Done.advance(), ConversationStage::Done);
    }

    #[test]
    fn transcript_lengths_map_onto_stages() {
        assert_eq!(
            ConversationStage::from_transcript_len(1),
            Some(ConversationStage::What)
        );
        assert_eq!(
            ConversationStage::from_transcript_len(3),
            Some(ConversationStage::Why)
        );
        assert_eq!(
            ConversationStage::from_transcript_len(5),
            Some(ConversationStage::Highlight)
        );
        assert_eq!(
            ConversationStage::from_transcript_len(7),
            Some(ConversationStage::Lowlight)
        );
        for len in [9, 10, 11, 27] {
            assert_eq!(
                ConversationStage::from_transcript_len(len),
                Some(ConversationStage::Done)
            );
        }
        for len in [0, 2, 4, 6, 8] {
            assert_eq!(ConversationStage::from_transcript_len(len), None);
        }
    }
}
