//! Instrumented fakes for the driver and the window.

use std::cell::{Cell, RefCell};

use anyhow::{anyhow, Result};

use crate::core::Presenter;
use crate::device::{GlApi, ShaderStage};

/// One recorded driver call. Handles are the fake's `u32` ids.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Version,
    GetError,
    Viewport(i32, i32, i32, i32),
    ClearColor([f32; 4]),
    Clear(u32),
    DrawTriangles { first: i32, count: i32 },

    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    ShaderCompileStatus(u32),
    ShaderInfoLog(u32),
    DeleteShader(u32),

    CreateProgram(u32),
    AttachShader(u32, u32),
    DetachShader(u32, u32),
    LinkProgram(u32),
    ProgramLinkStatus(u32),
    ProgramInfoLog(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),

    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),

    CreateBuffer(u32),
    BindArrayBuffer(Option<u32>),
    ArrayBufferStaticData(usize),
    DeleteBuffer(u32),

    VertexAttribPointer { index: u32, size: i32, stride: i32, offset: i32 },
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
}

impl Call {
    /// The call that undoes this one, for calls that acquire or bind state.
    pub fn release(&self) -> Option<Call> {
        match *self {
            Call::CreateShader(_, s) => Some(Call::DeleteShader(s)),
            Call::CreateProgram(p) => Some(Call::DeleteProgram(p)),
            Call::AttachShader(p, s) => Some(Call::DetachShader(p, s)),
            Call::UseProgram(Some(_)) => Some(Call::UseProgram(None)),
            Call::CreateVertexArray(v) => Some(Call::DeleteVertexArray(v)),
            Call::BindVertexArray(Some(_)) => Some(Call::BindVertexArray(None)),
            Call::CreateBuffer(b) => Some(Call::DeleteBuffer(b)),
            Call::BindArrayBuffer(Some(_)) => Some(Call::BindArrayBuffer(None)),
            Call::EnableVertexAttribArray(i) => Some(Call::DisableVertexAttribArray(i)),
            _ => None,
        }
    }
}

/// Fake driver that records every call in order.
///
/// Errors can be injected: a driver error code raised after a matching call,
/// a failing compile for one stage, or a failing link.
#[derive(Debug, Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    shader_stages: RefCell<Vec<(u32, ShaderStage)>>,

    error_trigger: Cell<Option<(fn(&Call) -> bool, u32)>>,
    pending_error: Cell<u32>,
    compile_failure: RefCell<Option<(ShaderStage, String)>>,
    link_failure: RefCell<Option<String>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Raises `code` on the error query after the first call matching `when`.
    pub fn fail_after(&self, when: fn(&Call) -> bool, code: u32) {
        self.error_trigger.set(Some((when, code)));
    }

    pub fn fail_compile(&self, stage: ShaderStage, log: &str) {
        *self.compile_failure.borrow_mut() = Some((stage, log.to_string()));
    }

    pub fn fail_link(&self, log: &str) {
        *self.link_failure.borrow_mut() = Some(log.to_string());
    }

    fn record(&self, call: Call) {
        if let Some((when, code)) = self.error_trigger.get() {
            if when(&call) {
                self.pending_error.set(code);
                self.error_trigger.set(None);
            }
        }
        self.calls.borrow_mut().push(call);
    }

    fn alloc(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn stage_of(&self, shader: u32) -> Option<ShaderStage> {
        self.shader_stages
            .borrow()
            .iter()
            .find(|(id, _)| *id == shader)
            .map(|(_, stage)| *stage)
    }
}

impl GlApi for RecordingGl {
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;
    type Buffer = u32;

    fn version(&self) -> String {
        self.record(Call::Version);
        "4.0.0 Recording".to_string()
    }

    fn get_error(&self) -> u32 {
        self.record(Call::GetError);
        self.pending_error.replace(glow::NO_ERROR)
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn draw_triangles(&self, first: i32, count: i32) {
        self.record(Call::DrawTriangles { first, count });
    }

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let id = self.alloc();
        self.shader_stages.borrow_mut().push((id, stage));
        self.record(Call::CreateShader(stage, id));
        Ok(id)
    }

    fn shader_source(&self, shader: u32, _source: &str) {
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.record(Call::ShaderCompileStatus(shader));
        match &*self.compile_failure.borrow() {
            Some((stage, _)) => self.stage_of(shader) != Some(*stage),
            None => true,
        }
    }

    fn shader_info_log(&self, shader: u32) -> String {
        self.record(Call::ShaderInfoLog(shader));
        self.compile_failure
            .borrow()
            .as_ref()
            .map(|(_, log)| log.clone())
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateProgram(id));
        Ok(id)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader(program, shader));
    }

    fn detach_shader(&self, program: u32, shader: u32) {
        self.record(Call::DetachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.record(Call::ProgramLinkStatus(program));
        self.link_failure.borrow().is_none()
    }

    fn program_info_log(&self, program: u32) -> String {
        self.record(Call::ProgramInfoLog(program));
        self.link_failure.borrow().clone().unwrap_or_default()
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn bind_vertex_array(&self, vao: Option<u32>) {
        self.record(Call::BindVertexArray(vao));
    }

    fn delete_vertex_array(&self, vao: u32) {
        self.record(Call::DeleteVertexArray(vao));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.alloc();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn bind_array_buffer(&self, buffer: Option<u32>) {
        self.record(Call::BindArrayBuffer(buffer));
    }

    fn array_buffer_static_data(&self, data: &[u8]) {
        self.record(Call::ArrayBufferStaticData(data.len()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, size: i32, stride: i32, offset: i32) {
        self.record(Call::VertexAttribPointer { index, size, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::DisableVertexAttribArray(index));
    }
}

/// One recorded window-side call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresentCall {
    SwapBuffers,
    RequestRedraw,
    SetTitle(String),
}

/// Fake window recording presents, redraw requests and title changes.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    calls: RefCell<Vec<PresentCall>>,
    swap_failure: RefCell<Option<String>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<PresentCall> {
        self.calls.borrow().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                PresentCall::SetTitle(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn fail_swap(&self, message: &str) {
        *self.swap_failure.borrow_mut() = Some(message.to_string());
    }
}

impl Presenter for RecordingPresenter {
    fn swap_buffers(&self) -> Result<()> {
        self.calls.borrow_mut().push(PresentCall::SwapBuffers);
        match &*self.swap_failure.borrow() {
            Some(message) => Err(anyhow!("{message}")),
            None => Ok(()),
        }
    }

    fn request_redraw(&self) {
        self.calls.borrow_mut().push(PresentCall::RequestRedraw);
    }

    fn set_title(&self, title: &str) {
        self.calls.borrow_mut().push(PresentCall::SetTitle(title.to_string()));
    }
}
