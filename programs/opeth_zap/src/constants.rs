/// System-owned PDA that holds lamports mid-zap and signs for every zap vault
pub const ZAP_AUTHORITY_SEED: &[u8] = b"zap_authority";

/// Per-mint token account PDA owned by the zap authority
pub const ZAP_VAULT_SEED: &[u8] = b"zap_vault";
