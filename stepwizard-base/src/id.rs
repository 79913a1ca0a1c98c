/// Macro to create an opaque ID type backed by a `u32`
///
/// IDs only tag log events, so the generated type carries no parsing or
/// default value.
#[macro_export]
macro_rules! generate_id_type {
  ($struct_name:ident) => {
    #[derive(Hash, Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde-support", derive(serde::Serialize))]
    pub struct $struct_name(u32);
    impl $struct_name {
      pub fn new(val: u32) -> Self {
        $struct_name(val)
      }
      pub fn val(&self) -> u32 {
        self.0
      }
    }
    impl std::fmt::Display for $struct_name {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
      }
    }
  };
}

#[cfg(test)]
mod tests {
  generate_id_type!(PanelId);

  #[test]
  fn display_matches_val() {
    let panel = PanelId::new(7);
    assert_eq!(panel.val(), 7);
    assert_eq!(format!("panel-{}", panel), "panel-7");
  }
}
