//! Gating checks: is this a Flex application, and does it load modules.

use crate::analysis::markers::Marker;
use crate::model::DisassemblyDump;

/// True iff the dump mentions the Flex `resourceModuleURLs` FlashVar.
pub fn is_flex_application(dump: &DisassemblyDump) -> bool {
    dump.contains(Marker::FlexApplication.literal())
}

/// True iff the dump contains the `ModuleInfo::load` method body.
pub fn contains_module_load(dump: &DisassemblyDump) -> bool {
    dump.contains(Marker::ModuleLoad.literal())
}
