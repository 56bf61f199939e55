mod sftp_server_broker;

pub use sftp_server_broker::SftpServerBrokerService;
