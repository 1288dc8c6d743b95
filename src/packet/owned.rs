use super::metadata::PacketMetadata;
use super::view::PacketView;

/// Captured frame as delivered by the capture reader.
#[derive(Debug, Clone)]
pub struct Packet {
    pub data: Vec<u8>,
    pub metadata: PacketMetadata,
}

impl Packet {
    pub fn new(data: Vec<u8>, encap: u32) -> Self {
        Self {
            data,
            metadata: PacketMetadata {
                frame_number: 0,
                encap,
            },
        }
    }

    pub fn with_frame_number(mut self, frame_number: u64) -> Self {
        self.metadata.frame_number = frame_number;
        self
    }

    pub fn view(&self) -> PacketView<'_> {
        PacketView::new(&self.data)
    }
}
