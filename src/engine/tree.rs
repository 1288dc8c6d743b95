use super::expert::ExpertInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub abbrev: &'static str,
    pub label: String,
    pub offset: usize,
    pub length: usize,
    pub notices: Vec<ExpertInfo>,
}

/// Per-frame structural record built by the full dissection path.
#[derive(Debug, Default, Clone)]
pub struct DecodeTree {
    nodes: Vec<TreeNode>,
}

impl DecodeTree {
    pub fn add_item(
        &mut self,
        abbrev: &'static str,
        label: impl Into<String>,
        offset: usize,
        length: usize,
    ) -> NodeId {
        self.nodes.push(TreeNode {
            abbrev,
            label: label.into(),
            offset,
            length,
            notices: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_notice(&mut self, node: NodeId, notice: ExpertInfo) {
        if let Some(node) = self.nodes.get_mut(node.0) {
            node.notices.push(notice);
        }
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn find(&self, abbrev: &str) -> Option<&TreeNode> {
        self.nodes.iter().find(|node| node.abbrev == abbrev)
    }

    pub fn notice_count(&self) -> usize {
        self.nodes.iter().map(|node| node.notices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::DecodeTree;
    use crate::engine::expert::RAW_NO_LINK;

    #[test]
    fn notices_attach_to_their_node() {
        let mut tree = DecodeTree::default();
        let raw = tree.add_item("raw", "Raw packet data", 0, 0);
        let data = tree.add_item("data", "Data (4 bytes)", 0, 4);
        tree.add_notice(raw, RAW_NO_LINK);

        assert_eq!(tree.notice_count(), 1);
        assert_eq!(tree.node(raw).map(|node| node.notices.len()), Some(1));
        assert_eq!(tree.node(data).map(|node| node.notices.len()), Some(0));
        assert_eq!(tree.find("data").map(|node| node.length), Some(4));
    }
}
