mod rpc_request;

pub use rpc_request::RpcRequest;
