use crate::commands::*;
use crate::frame::{Encode, Frame};
use crate::registry::Entry;
use bytes::BufMut;
use derive_more::From;

macro_rules! commands {
    ($($variant:ident),+ $(,)?) => {
        /// Every command the codec understands, plus the raw fallback.
        #[derive(Debug, Clone, PartialEq, Eq, From)]
        pub enum Command {
            $($variant($variant),)+
            Raw(RawCommand),
        }

        impl Command {
            pub fn command_class(&self) -> u8 {
                match self {
                    $(Self::$variant(_) => <$variant as Frame>::COMMAND_CLASS,)+
                    Self::Raw(raw) => raw.command_class,
                }
            }

            pub fn command_id(&self) -> u8 {
                match self {
                    $(Self::$variant(_) => <$variant as Frame>::COMMAND,)+
                    Self::Raw(raw) => raw.command,
                }
            }

            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => stringify!($variant),)+
                    Self::Raw(_) => "RawCommand",
                }
            }
        }

        impl Encode for Command {
            fn wire_length(&self) -> usize {
                match self {
                    $(Self::$variant(command) => command.wire_length(),)+
                    Self::Raw(raw) => raw.wire_length(),
                }
            }

            fn encode_to<B: BufMut>(
                &self,
                buffer: &mut B,
            ) {
                match self {
                    $(Self::$variant(command) => command.encode_to(buffer),)+
                    Self::Raw(raw) => raw.encode_to(buffer),
                }
            }
        }

        pub(crate) fn registered() -> Vec<Entry> {
            vec![$(Entry::of::<$variant>(),)+]
        }
    };
}

commands! {
    AssociationSet,
    AssociationGet,
    AssociationReport,
    AssociationRemove,
    AssociationGroupingsReport,
    BasicSet,
    BasicGet,
    BasicReport,
    ManufacturerSpecificGet,
    ManufacturerSpecificReport,
    NodeAdd,
    NodeAddStatus,
    NodeRemove,
    NodeRemoveStatus,
    FailedNodeRemove,
    FailedNodeRemoveReport,
    LearnModeSet,
    NodeInfoSend,
    NodeListGet,
    NodeListReport,
    VersionGet,
    VersionReport,
}
