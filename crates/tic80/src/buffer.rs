use core::marker::PhantomData;
use core::ptr;

/// A caller's bytes as the host sees them: a raw address and an 8-bit count.
///
/// The projection borrows its source, so it cannot outlive the bytes it points
/// at; it is built immediately before a primitive call and dropped right
/// after. Nothing is copied.
#[derive(Clone, Copy, Debug)]
pub struct Projected<'a> {
    ptr: *const u8,
    count: i8,
    _source: PhantomData<&'a [u8]>,
}

impl<'a> Projected<'a> {
    /// Absent or empty input projects to a null address and a zero count.
    /// Longer inputs are counted modulo 256, as the host's count is one byte.
    pub fn new(bytes: Option<&'a [u8]>) -> Self {
        match bytes {
            Some(bytes) if !bytes.is_empty() => Self {
                ptr: bytes.as_ptr(),
                count: bytes.len() as i8,
                _source: PhantomData,
            },
            _ => Self {
                ptr: ptr::null(),
                count: 0,
                _source: PhantomData,
            },
        }
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.ptr
    }

    pub fn count(&self) -> i8 {
        self.count
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }
}

impl<'a> From<&'a [u8]> for Projected<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Projected::new(Some(bytes))
    }
}
