//! Cross-subsystem integration flows.

#[cfg(test)]
mod codec_flows;
#[cfg(test)]
mod status_flows;
