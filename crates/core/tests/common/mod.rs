#![allow(dead_code)]

//! Synthetic `swfdump -abc` output used across the core tests.

pub const HEADER: &str = "<swf xmlns='http://macromedia/2003/swfx' version='10' framerate='24' size='10000x7500' compressed='true' >";

pub const FLEX_FIELD: &str = "    var resourceModuleURLs:String";

pub const LOAD_SIGNATURE: &str =
    "function mx.modules:ModuleInfo:::load(Object,Object,Object,mx.core:IFlexModuleFactory)::void";

pub const BLOCK_TRAILER: &str = "0 Traits Entries";

pub const VULNERABLE_PAIR: [&str; 2] =
    ["        getproperty   \t:currentDomain", "        setproperty   \t:securityDomain"];

pub const PATCH_PAIR: [&str; 2] = ["        pushfalse     \t", "        pushtrue"];

pub fn product_info(version: &str) -> String {
    format!(
        "  <ProductInfo product='Adobe Flex' edition='' version='{version}' build='21328' compileDate='5/4/11 12:00 AM' />"
    )
}

/// Flex dump without a `ModuleInfo::load` body, compiled with `version`.
pub fn flex_dump_with_sdk(version: &str) -> String {
    [HEADER.to_string(), product_info(version), FLEX_FIELD.to_string()].join("\n")
}

/// Flex dump whose `ModuleInfo::load` body holds `body`, closed by the trailer.
pub fn flex_dump_with_block(body: &[&str]) -> String {
    let mut lines = vec![HEADER.to_string(), product_info("3.5.0"), FLEX_FIELD.to_string()];
    lines.push(LOAD_SIGNATURE.to_string());
    lines.push("maxStack:5 localCount:6 initScopeDepth:9 maxScopeDepth:10".to_string());
    lines.push("        getlocal0     \t".to_string());
    lines.push("        pushscope     \t".to_string());
    lines.extend(body.iter().map(|l| l.to_string()));
    lines.push("        returnvoid    \t".to_string());
    lines.push("0 Extras".to_string());
    lines.push(BLOCK_TRAILER.to_string());
    lines.push("function mx.modules:ModuleInfo:::unload()::void".to_string());
    lines.join("\n")
}

pub fn vulnerable_body() -> Vec<&'static str> {
    let mut body = vec!["        getlex        \tflash.system:ApplicationDomain"];
    body.extend(VULNERABLE_PAIR);
    body
}

pub fn patched_body() -> Vec<&'static str> {
    let mut body = vulnerable_body();
    body.push("        getlocal      \t4");
    body.extend(PATCH_PAIR);
    body
}
