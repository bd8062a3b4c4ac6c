/// Cumulative pagination over the filtered channel list.
///
/// "Load more" grows the visible slice by one page; only `reset` shrinks it
/// (back to page 1). Every filter, search or section change resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
  pub page_size: usize,
  pub current_page: usize,
}

impl Pager {
  pub fn new(page_size: usize) -> Self {
    Self { page_size, current_page: 1 }
  }

  /// Number of items visible: everything up to the end of the current page.
  pub fn visible_len(&self, filtered_len: usize) -> usize {
    filtered_len.min(self.current_page * self.page_size)
  }

  /// Whether items remain beyond the current slice end (the load-more
  /// affordance is shown exactly when this is true).
  pub fn has_more(&self, filtered_len: usize) -> bool {
    self.visible_len(filtered_len) < filtered_len
  }

  /// Grow the visible slice by one page. Never shrinks it.
  pub fn load_more(&mut self) {
    self.current_page += 1;
  }

  /// Back to page 1. Every filter/search/section change lands here.
  pub fn reset(&mut self) {
    self.current_page = 1;
  }
}
